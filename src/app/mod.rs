use std::{io, net::IpAddr, sync::Arc};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Settings, storage::Storage};

mod asset;
mod contact;
mod error;
mod health;
mod newsletter;

#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn Storage>,
}

fn app_router(assets_dir: &str) -> Router<AppState> {
    health::router()
        .merge(contact::router())
        .merge(newsletter::router())
        .merge(asset::router(assets_dir))
}

pub struct App {
    listener: TcpListener,
    assets_dir: String,
}

impl App {
    pub async fn with(config: Settings) -> Self {
        let listener = tokio::net::TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .expect("The listener should be able to bind the address.");

        Self {
            listener,
            assets_dir: config.application.assets_dir,
        }
    }

    pub fn host(&self) -> IpAddr {
        self.listener.local_addr().unwrap().ip()
    }

    pub fn port(&self) -> u16 {
        self.listener.local_addr().unwrap().port()
    }

    pub async fn serve(self, storage: Arc<dyn Storage>) -> Result<(), io::Error> {
        let app = app_router(&self.assets_dir)
            .with_state(AppState { storage })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
