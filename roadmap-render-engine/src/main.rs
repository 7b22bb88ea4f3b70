use crate::engine::core::app_setup::create_app;

mod engine;
mod input;
mod navigation;
mod rpc;
mod ui;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
