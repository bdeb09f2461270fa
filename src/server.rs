//! HTTP front-end for the gallery.
//!
//! Requests are handled one at a time on the calling thread. The gallery is
//! an immutable snapshot taken at startup.

use log::{debug, error, info, warn};
use tiny_http::{Header, Response, Server};

use crate::config::RenderSettings;
use crate::error::{GalleryError, Result};
use crate::loader::Gallery;
use crate::render::render_view;
use crate::router::{resolve, Route};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A fully rendered response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl PageResponse {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: HTML_CONTENT_TYPE,
            body,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT_CONTENT_TYPE,
            body: body.to_string(),
        }
    }
}

/// Request handler over a loaded gallery
pub struct GalleryApp {
    gallery: Gallery,
    settings: RenderSettings,
}

impl GalleryApp {
    pub fn new(gallery: Gallery, settings: RenderSettings) -> Self {
        Self { gallery, settings }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Route and render a request target
    pub fn handle(&self, method: &str, target: &str) -> PageResponse {
        if !matches!(method, "GET" | "HEAD") {
            return PageResponse::text(405, "Method Not Allowed");
        }

        let route = Route::parse(target);
        let view = resolve(&route, &self.gallery);
        let status = if view.is_not_found() { 404 } else { 200 };

        match render_view(&view, &self.settings) {
            Ok(body) => PageResponse::html(status, body),
            Err(e) => {
                error!("Failed to render {}: {}", target, e);
                PageResponse::text(500, "Internal Server Error")
            }
        }
    }
}

/// Bind `addr` and serve requests until the process exits
pub fn serve(app: &GalleryApp, addr: &str) -> Result<()> {
    let server = Server::http(addr)
        .map_err(|e| GalleryError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Serving {} chart(s) at http://{}", app.gallery().len(), addr);
    info!("Press Ctrl+C to stop");

    for request in server.incoming_requests() {
        let method = request.method().to_string();
        let target = request.url().to_string();
        let page = app.handle(&method, &target);

        debug!("{} {} -> {}", method, target, page.status);

        let mut response = Response::from_string(page.body).with_status_code(page.status);
        if let Ok(header) = Header::from_bytes("Content-Type", page.content_type) {
            response = response.with_header(header);
        }

        if let Err(e) = request.respond(response) {
            warn!("Failed to send response for {}: {}", target, e);
        }
    }

    Ok(())
}
