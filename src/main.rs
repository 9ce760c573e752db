use std::net::SocketAddr;

use astra::Server;

use crate::api::{PropertyApi, PropertyService};
use crate::responses::error_to_response;
use crate::router::handle;

mod api;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Remote Property API client (env-configurable for deployments)
    let api_url =
        std::env::var("PROPERTY_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let api = match PropertyApi::new(&api_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ Property API client init failed: {e}");
            std::process::exit(1);
        }
    };
    println!("✅ Property API client pointed at {api_url}");

    if let Err(e) = api.property_stats() {
        eprintln!("⚠️  Property API not reachable yet: {e}");
    }

    // 2️⃣ Start the server
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR {bind}: {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the API client into the closure
    let result = server.serve(move |req, _info| match handle(req, &api) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
