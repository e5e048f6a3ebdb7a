use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{ProductTag, ReviewCategory},
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CatalogQuery {
    /// `All`, or one of the page's filter tags.
    pub tag: Option<String>,
}

impl CatalogQuery {
    pub fn tag(&self) -> AppResult<Option<ProductTag>> {
        match self.tag.as_deref().map(str::trim) {
            None | Some("") | Some("All") => Ok(None),
            Some("Men") => Ok(Some(ProductTag::Men)),
            Some("Women") => Ok(Some(ProductTag::Women)),
            Some("Children") => Ok(Some(ProductTag::Children)),
            Some("Accessories") => Ok(Some(ProductTag::Accessories)),
            Some("Unisex") => Ok(Some(ProductTag::Unisex)),
            Some(other) => Err(AppError::BadRequest(format!("unknown tag {other}"))),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReviewQuery {
    pub category: Option<ReviewCategory>,
}
