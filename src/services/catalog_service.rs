use crate::{
    catalog,
    dto::catalog::{CategoryInfo, ProductList},
    error::{AppError, AppResult},
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::params::CatalogQuery,
};

pub fn list_categories() -> ApiResponse<Vec<CategoryInfo>> {
    let items: Vec<CategoryInfo> = Category::ALL
        .into_iter()
        .map(|category| CategoryInfo {
            category,
            title: category.title().to_string(),
            path: category.path().to_string(),
            filter_tags: category.filter_tags().to_vec(),
        })
        .collect();
    let meta = Meta::total(items.len());
    ApiResponse::success("Categories", items, Some(meta))
}

pub fn list_products(category: Category, query: CatalogQuery) -> AppResult<ApiResponse<ProductList>> {
    let tag = query.tag()?;
    if let Some(tag) = tag {
        if !category.filter_tags().contains(&tag) {
            return Err(AppError::BadRequest(format!(
                "{category} cannot be filtered by {tag:?}"
            )));
        }
    }

    let items = catalog::filtered(category, tag);
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        category.title(),
        ProductList { category, items },
        Some(meta),
    ))
}

pub fn get_product(category: Category, id: u32) -> AppResult<ApiResponse<Product>> {
    let product = catalog::find(category, id).ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", *product, None))
}
