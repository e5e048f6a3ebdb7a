use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::SearchItem,
    domain::cart::Receipt,
    dto::{
        cart::{AddToCartRequest, CartOverview, CartSummary, CartView, QuantityInput, SetQuantityRequest},
        catalog::{CategoryInfo, ProductList},
        reviews::{DeletedReview, ReviewList, SubmitReviewRequest},
        search::{SearchRequest, SearchResults},
    },
    models::{CartLine, Category, Product, ProductTag, Review, ReviewCategory},
    response::{ApiResponse, Meta, NoticeLevel},
    routes::{cart, catalog, health, params, reviews, search},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_categories,
        catalog::list_products,
        catalog::get_product,
        cart::cart_overview,
        cart::view_cart,
        cart::add_to_cart,
        cart::set_quantity,
        cart::remove_from_cart,
        cart::checkout,
        reviews::list_review_categories,
        reviews::list_reviews,
        reviews::submit_review,
        reviews::delete_review,
        search::search,
        search::search_results
    ),
    components(
        schemas(
            Category,
            ProductTag,
            Product,
            CartLine,
            Review,
            ReviewCategory,
            SearchItem,
            Receipt,
            CategoryInfo,
            ProductList,
            AddToCartRequest,
            QuantityInput,
            SetQuantityRequest,
            CartView,
            CartSummary,
            CartOverview,
            SubmitReviewRequest,
            ReviewList,
            DeletedReview,
            SearchRequest,
            SearchResults,
            params::CatalogQuery,
            params::ReviewQuery,
            Meta,
            NoticeLevel,
            ApiResponse<CartView>,
            ApiResponse<ProductList>,
            ApiResponse<ReviewList>,
            ApiResponse<SearchResults>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Category pages and their products"),
        (name = "Cart", description = "Per-page carts"),
        (name = "Reviews", description = "Shopper reviews"),
        (name = "Search", description = "Navigation bar search"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
