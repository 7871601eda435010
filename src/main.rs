use anyhow::Context;
use log::{error, info, warn};
use sdl2::keyboard::Keycode;

use softscreen::demos::{self, Demo};
use softscreen::display::{InputEvent, ScreenConfig, SdlScreen, SdlWindow, Surface};
use softscreen::raster::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use softscreen::util::FpsCounter;

struct Options {
    config: ScreenConfig,
    demo: String,
    show_info: bool,
}

/// Parse command line arguments on top of an optional config file
fn parse_args() -> anyhow::Result<Options> {
    let args: Vec<String> = std::env::args().collect();

    // --config is applied first so the other flags override it
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a file path")?;
            ScreenConfig::load(path).with_context(|| format!("Failed to load config {}", path))?
        },
        None => ScreenConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, "softscreen"),
    };
    let mut demo = demos::NAMES[0].to_string();
    let mut show_info = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => i += 1,
            "--no-vsync" => config.vsync = false,
            "--fullscreen" => config.fullscreen = true,
            "--hide-cursor" => config.hide_cursor = true,
            "--info" => show_info = true,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            config.width = w;
                            config.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--demo" | "-d" => {
                if i + 1 < args.len() {
                    demo = args[i + 1].clone();
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: softscreen [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --demo NAME, -d NAME  One of: {}", demos::NAMES.join(", "));
                println!("  --config FILE, -c FILE  Load screen settings from JSON");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --fullscreen          Start in desktop fullscreen");
                println!("  --hide-cursor         Hide the mouse cursor");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --info                Log renderer name and texture formats");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            other => warn!("ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    config.validate()?;
    Ok(Options {
        config,
        demo,
        show_info,
    })
}

/// Next demo name in cycling order, wrapping around
fn cycle(current: &str, step: isize) -> &'static str {
    let len = demos::NAMES.len() as isize;
    let idx = demos::NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(current))
        .unwrap_or(0) as isize;
    demos::NAMES[(idx + step).rem_euclid(len) as usize]
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let options = parse_args()?;
    let config = options.config;

    let mut demo: Box<dyn Demo> = demos::by_name(&options.demo)
        .with_context(|| format!("Unknown demo '{}'", options.demo))?;

    let (window, texture_creator) =
        SdlWindow::open(&config).context("Failed to open SDL window")?;
    let mut screen =
        SdlScreen::new(window, &texture_creator, &config).context("Failed to create screen")?;
    if options.show_info {
        screen.show_render_info();
    }

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);

    info!("Running demo: {}", demo.name());
    info!("Controls: Left/Right cycle demos, F fullscreen, Q or Escape quit");

    while screen.is_open() {
        let (dt, _current_fps, avg_fps) = fps_counter.tick();
        if fps_counter.should_report() {
            info!("fps {:.1}", avg_fps);
        }

        for event in screen.handle_events()? {
            if let InputEvent::KeyDown(key) = event {
                let step = match key {
                    Keycode::Escape => {
                        screen.quit();
                        continue;
                    },
                    Keycode::Left => -1,
                    Keycode::Right => 1,
                    _ => continue,
                };
                let next = cycle(demo.name(), step);
                // NAMES and by_name list the same demos
                match demos::by_name(next) {
                    Some(d) => {
                        demo = d;
                        info!("Switched to demo: {}", demo.name());
                    },
                    None => error!("demo '{}' is listed but cannot be built", next),
                }
            }
        }

        demo.update(dt);
        {
            let mut frame = screen.acquire();
            let (r, g, b, a) = demo.clear_color();
            frame.clear(r, g, b, a);
            demo.render(&mut frame);
        }
        screen.present()?;
    }

    info!("Bye after {} frames", fps_counter.frame_count());
    Ok(())
}
