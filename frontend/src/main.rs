//! Entry point for the WASM application

pub fn main() {
    fraudshield_frontend::run();
}
