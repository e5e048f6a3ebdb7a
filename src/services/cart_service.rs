use crate::{
    catalog,
    domain::cart::{Cart, CheckoutError, Receipt},
    dto::cart::{AddToCartRequest, CartOverview, CartSummary, CartView, SetQuantityRequest},
    error::{AppError, AppResult},
    middleware::session::Session,
    models::Category,
    response::{ApiResponse, Meta},
    state::AppState,
    storage::Slot,
};

async fn load_cart(state: &AppState, key: &str) -> AppResult<Cart> {
    let lines = state.storage.load_json(key).await?;
    Ok(Cart::from_lines(lines))
}

async fn persist_cart(state: &AppState, key: &str, cart: &Cart) -> AppResult<()> {
    state.storage.save_json(key, cart.lines()).await
}

fn cart_view(category: Category, cart: &Cart) -> CartView {
    CartView {
        category,
        lines: cart.lines().to_vec(),
        items: cart.item_count(),
        total: cart.total().to_string(),
    }
}

pub async fn view_cart(
    state: &AppState,
    session: &Session,
    category: Category,
) -> AppResult<ApiResponse<CartView>> {
    let key = state.storage.key(session, Slot::Cart(category));
    let cart = load_cart(state, &key).await?;
    let meta = Meta::total(cart.lines().len());
    Ok(ApiResponse::success("OK", cart_view(category, &cart), Some(meta)))
}

pub async fn overview(state: &AppState, session: &Session) -> AppResult<ApiResponse<CartOverview>> {
    let mut carts = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let key = state.storage.key(session, Slot::Cart(category));
        let cart = load_cart(state, &key).await?;
        carts.push(CartSummary {
            category,
            title: category.title().to_string(),
            lines: cart.lines().len(),
            items: cart.item_count(),
            total: cart.total().to_string(),
        });
    }
    let items = carts.iter().map(|summary| summary.items).sum();
    let meta = Meta::total(carts.len());
    Ok(ApiResponse::success(
        "OK",
        CartOverview { carts, items },
        Some(meta),
    ))
}

pub async fn add_item(
    state: &AppState,
    session: &Session,
    category: Category,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let product = catalog::find(category, payload.product_id).ok_or(AppError::NotFound)?;

    let _guard = state.write_guard().await;
    let key = state.storage.key(session, Slot::Cart(category));
    let mut cart = load_cart(state, &key).await?;
    let quantity = cart.add(product).quantity;
    persist_cart(state, &key, &cart).await?;

    tracing::debug!(
        session = session.as_str(),
        %category,
        product_id = product.id,
        quantity,
        "cart item added"
    );
    Ok(ApiResponse::success(
        format!("{} added to cart!", product.name),
        cart_view(category, &cart),
        Some(Meta::total(cart.lines().len())),
    ))
}

pub async fn remove_item(
    state: &AppState,
    session: &Session,
    category: Category,
    product_id: u32,
) -> AppResult<ApiResponse<CartView>> {
    let _guard = state.write_guard().await;
    let key = state.storage.key(session, Slot::Cart(category));
    let mut cart = load_cart(state, &key).await?;
    let removed = cart.remove(product_id);
    persist_cart(state, &key, &cart).await?;

    tracing::debug!(session = session.as_str(), %category, product_id, removed, "cart item removed");
    Ok(ApiResponse::info(
        "Item removed from cart.",
        cart_view(category, &cart),
        Some(Meta::total(cart.lines().len())),
    ))
}

pub async fn set_quantity(
    state: &AppState,
    session: &Session,
    category: Category,
    product_id: u32,
    payload: SetQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    let raw = payload.quantity.raw();

    let _guard = state.write_guard().await;
    let key = state.storage.key(session, Slot::Cart(category));
    let mut cart = load_cart(state, &key).await?;
    let quantity = cart
        .set_quantity(product_id, &raw)
        .map(|line| line.quantity);
    persist_cart(state, &key, &cart).await?;

    tracing::debug!(
        session = session.as_str(),
        %category,
        product_id,
        raw = %raw,
        ?quantity,
        "cart quantity set"
    );
    Ok(ApiResponse::info(
        "Quantity updated.",
        cart_view(category, &cart),
        Some(Meta::total(cart.lines().len())),
    ))
}

pub async fn checkout(
    state: &AppState,
    session: &Session,
    category: Category,
) -> AppResult<ApiResponse<Receipt>> {
    let _guard = state.write_guard().await;
    let key = state.storage.key(session, Slot::Cart(category));
    let mut cart = load_cart(state, &key).await?;
    let receipt = cart.checkout().map_err(|err| match err {
        CheckoutError::Empty => AppError::EmptyCart,
    })?;
    state.storage.remove(&key).await?;

    tracing::info!(
        session = session.as_str(),
        %category,
        total = %receipt.total,
        items = receipt.items,
        "checkout completed"
    );
    Ok(ApiResponse::success(
        format!("Purchase successful! Total: ${}", receipt.total),
        receipt,
        Some(Meta::empty()),
    ))
}
