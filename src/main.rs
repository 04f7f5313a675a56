use order_console::components::App;
use order_console::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Order console starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
