//! Entry point for the WASM application

pub fn main() {
    project02_landing::start();
}
