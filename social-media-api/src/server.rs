use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    handlers::{self, SharedStore},
    store::Store,
};

/// Builds the application router around `store`.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/post", post(handlers::create_post).get(handlers::list_posts))
        .route("/post/:post_id", get(handlers::get_post_with_comments))
        .route("/post/:post_id/comment", get(handlers::list_comments))
        .route("/comment", post(handlers::create_comment))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub struct Server {
    listener: TcpListener,
    store: SharedStore,
}

impl Server {
    /// Serves a fresh, empty store on `listener`.
    pub fn new(listener: TcpListener) -> Self {
        Self::with_store(listener, Arc::new(Store::new()))
    }

    pub fn with_store(listener: TcpListener, store: SharedStore) -> Self {
        Self { listener, store }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight ones.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server { listener, store } = self;
        let app = router(Arc::clone(&store));

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(
            posts = store.post_count(),
            comments = store.comment_count(),
            "server shut down"
        );
        Ok(())
    }

    pub async fn run_until_ctrl_c(self) -> Result<()> {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "failed to install ctrl-c handler");
            }
        })
        .await
    }
}
