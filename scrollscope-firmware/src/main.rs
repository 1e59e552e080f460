//! Scrollscope - scrolling oscillograph firmware
//!
//! Six synthetic sine traces scroll right-to-left across a WT32-SC01
//! panel over an axis and grid backdrop. Touches leave colored markers
//! and a coordinate readout.

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use {esp_backtrace as _, esp_println as _};

use scrollscope_core::Scope;
use scrollscope_display::PixelDisplay;

use crate::board::Board;
use crate::config::SCOPE_CONFIG;

mod board;
mod config;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    info!("Scrollscope starting...");

    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let Board {
        mut display,
        mut touch,
        mut backlight,
    } = Board::new(peripherals);

    if let Err(e) = display.init() {
        defmt::panic!("Display init failed: {}", e);
    }
    info!("ST7796S ready");

    let mut scope = match Scope::start(&mut display, SCOPE_CONFIG) {
        Ok(scope) => scope,
        Err(e) => defmt::panic!("Scope start failed: {}", e),
    };
    backlight.set_high();

    let geometry = *scope.scroller().geometry();
    info!(
        "Panel {}x{}, {} points per trace",
        geometry.width(),
        geometry.height(),
        geometry.point_count()
    );

    if SCOPE_CONFIG.show_touch {
        match touch.init() {
            Ok(()) => info!("FT6336U ready"),
            // Polling keeps failing; each frame reports it and skips the marker
            Err(e) => warn!("Touch init failed: {}", e),
        }
        touch.set_orientation(display.orientation());
    }

    let interval = Duration::from_millis(u64::from(SCOPE_CONFIG.frame_interval_ms));

    loop {
        Timer::after(interval).await;

        match scope.frame(&mut display, &mut touch, Instant::now().as_millis()) {
            Ok(report) => {
                if let Some(fps) = report.fps {
                    info!("fps: {}", fps);
                }
                if let Some(point) = report.touch {
                    trace!("touch at ({}, {})", point.x, point.y);
                }
                if let Some(e) = report.touch_error {
                    trace!("touch read failed: {}", e);
                }
            }
            Err(e) => error!("Frame {} failed: {}", scope.scroller().tick(), e),
        }
    }
}
