use macroquad::window::Conf;
use rc_car::{RcCar, MANIFEST_JSON};
use rc_engine::{DirAssets, Game};

fn window_conf() -> Conf {
    rc_desktop::window_conf(&RcCar::new().config())
}

#[macroquad::main(window_conf)]
async fn main() {
    rc_desktop::init_logging();

    let exe = std::env::current_exe().ok();
    let assets = DirAssets::new(rc_car::asset_root(exe.as_deref()));
    if let Err(err) = rc_desktop::run(RcCar::new(), MANIFEST_JSON, assets).await {
        log::error!("rc-car: {:#}", err);
        std::process::exit(1);
    }
}
