//! Typed helpers over the backend's REST surface.
//!
//! Each helper builds an endpoint and [`RequestOptions`], delegates to
//! [`PosFlowClient::request`] and wraps the untouched body in an [`Envelope`].

use std::fmt::Display;

use serde::Serialize;

use crate::{
    AvailabilityUpdate, Credentials, Envelope, OrderStatus, PosFlowClient, RequestOptions, Result,
    StatusUpdate, StockAdjustment,
};

impl PosFlowClient {
    async fn envelope(&self, endpoint: &str, options: RequestOptions) -> Result<Envelope> {
        self.request(endpoint, options).await.map(Envelope::from)
    }

    // Orders

    /// Lists orders, optionally filtered by status.
    pub async fn get_orders(&self, status: Option<OrderStatus>) -> Result<Envelope> {
        self.envelope("/orders", RequestOptions::get().query_opt("status", status))
            .await
    }

    pub async fn get_order(&self, order_id: impl Display) -> Result<Envelope> {
        self.envelope(&format!("/orders/{order_id}"), RequestOptions::get())
            .await
    }

    pub async fn create_order<T: Serialize + ?Sized>(&self, order: &T) -> Result<Envelope> {
        self.envelope("/orders", RequestOptions::post().json(order)?)
            .await
    }

    pub async fn update_order_status(
        &self,
        order_id: impl Display,
        status: OrderStatus,
    ) -> Result<Envelope> {
        self.envelope(
            &format!("/orders/{order_id}/status"),
            RequestOptions::put().json(&StatusUpdate { status })?,
        )
        .await
    }

    pub async fn delete_order(&self, order_id: impl Display) -> Result<Envelope> {
        self.envelope(&format!("/orders/{order_id}"), RequestOptions::delete())
            .await
    }

    // Products

    /// Lists products, optionally filtered by availability.
    pub async fn get_products(&self, available: Option<bool>) -> Result<Envelope> {
        self.envelope(
            "/products",
            RequestOptions::get().query_opt("available", available),
        )
        .await
    }

    pub async fn get_product(&self, product_id: impl Display) -> Result<Envelope> {
        self.envelope(&format!("/products/{product_id}"), RequestOptions::get())
            .await
    }

    pub async fn create_product<T: Serialize + ?Sized>(&self, product: &T) -> Result<Envelope> {
        self.envelope("/products", RequestOptions::post().json(product)?)
            .await
    }

    pub async fn update_product<T: Serialize + ?Sized>(
        &self,
        product_id: impl Display,
        product: &T,
    ) -> Result<Envelope> {
        self.envelope(
            &format!("/products/{product_id}"),
            RequestOptions::put().json(product)?,
        )
        .await
    }

    pub async fn delete_product(&self, product_id: impl Display) -> Result<Envelope> {
        self.envelope(
            &format!("/products/{product_id}"),
            RequestOptions::delete(),
        )
        .await
    }

    // Inventory

    pub async fn get_inventory(&self) -> Result<Envelope> {
        self.envelope("/inventory", RequestOptions::get()).await
    }

    /// Applies a stock delta; negative `quantity` removes stock.
    pub async fn update_inventory(
        &self,
        product_id: impl Display,
        quantity: i64,
        reason: impl Into<String>,
    ) -> Result<Envelope> {
        let adjustment = StockAdjustment {
            product_id: product_id.to_string(),
            quantity,
            reason: reason.into(),
        };
        self.envelope("/inventory", RequestOptions::post().json(&adjustment)?)
            .await
    }

    // Sales

    /// Daily report for `date` (`YYYY-MM-DD`), or today when absent.
    pub async fn get_daily_sales(&self, date: Option<&str>) -> Result<Envelope> {
        self.envelope("/sales/daily", RequestOptions::get().query_opt("date", date))
            .await
    }

    pub async fn get_sales_report(&self, start: &str, end: &str) -> Result<Envelope> {
        self.envelope(
            "/sales/report",
            RequestOptions::get().query("start", start).query("end", end),
        )
        .await
    }

    pub async fn close_day(&self) -> Result<Envelope> {
        self.envelope("/sales/close-day", RequestOptions::post())
            .await
    }

    // Auth

    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Envelope> {
        let credentials = Credentials {
            username: username.into(),
            password: password.into(),
        };
        self.envelope("/auth/login", RequestOptions::post().json(&credentials)?)
            .await
    }

    pub async fn logout(&self) -> Result<Envelope> {
        self.envelope("/auth/logout", RequestOptions::post()).await
    }

    pub async fn current_user(&self) -> Result<Envelope> {
        self.envelope("/auth/me", RequestOptions::get()).await
    }

    // Menu

    pub async fn get_menu(&self) -> Result<Envelope> {
        self.envelope("/menu", RequestOptions::get()).await
    }

    pub async fn update_menu_availability(
        &self,
        item_id: impl Display,
        available: bool,
    ) -> Result<Envelope> {
        self.envelope(
            &format!("/menu/{item_id}/availability"),
            RequestOptions::put().json(&AvailabilityUpdate { available })?,
        )
        .await
    }
}
