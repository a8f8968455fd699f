use std::{process, rc::Rc, time::Instant};

use glam::Vec2;
use glow::HasContext;
use panes_core::{DrawList, Navigator, UpdateContext};

use crate::{
    abs::{App, WindowOptions},
    input::Input,
    render::{font::FontAtlas, ui::uirenderer::UIRenderer},
    scenes::{BACKGROUND, Demo, DemoContext, SAMPLE_TEXT, menu::MenuScreen},
    settings::Settings,
};

mod abs;
mod input;
mod logging;
mod render;
mod scenes;
mod settings;

#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {
        $crate::abs::ShaderProgram::from_sources(
            &$gl,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
    };
}

/// Command line options.
struct Args {
    demo: Option<Demo>,
    text_file: Option<String>,
    verbosity: usize,
}

fn usage(program: &str, opts: &getopts::Options) -> String {
    let brief = format!("Usage: {} [options]\n\nDemos: {}", program, Demo::names());
    opts.usage(&brief)
}

/// Parses the command line. `Ok(None)` means help was printed and the program should exit.
fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let program = args.first().map_or("panes", String::as_str);

    let mut opts = getopts::Options::new();
    opts.optopt("d", "demo", "open a demo on top of the launcher", "NAME");
    opts.optopt("t", "text", "file shown by the text area demo", "FILE");
    opts.optflagmulti("v", "verbose", "log more (repeat for trace output)");
    opts.optflag("h", "help", "print this help");

    let matches = opts
        .parse(args.iter().skip(1))
        .map_err(|e| format!("{}\n\n{}", e, usage(program, &opts)))?;
    if matches.opt_present("h") {
        println!("{}", usage(program, &opts));
        return Ok(None);
    }

    let demo = match matches.opt_str("d") {
        Some(name) => Some(Demo::from_name(&name).ok_or_else(|| {
            format!("unknown demo '{}', expected one of: {}", name, Demo::names())
        })?),
        None => None,
    };

    Ok(Some(Args {
        demo,
        text_file: matches.opt_str("t"),
        verbosity: matches.opt_count("v"),
    }))
}

fn log_level(settings: &Settings, verbosity: usize) -> log::LevelFilter {
    match verbosity {
        0 => settings.log_level(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn run(args: Args, settings: Settings) -> Result<(), String> {
    let text: Rc<str> = match &args.text_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("could not read {}: {}", path, e))?;
            log::info!("Loaded {} lines from {}", text.lines().count(), path);
            Rc::from(text)
        }
        None => Rc::from(SAMPLE_TEXT),
    };

    let mut app = App::new(
        "Panes",
        WindowOptions {
            width: settings.window_width,
            height: settings.window_height,
            fullscreen: settings.fullscreen,
            vsync: settings.vsync,
        },
    )?;

    unsafe {
        app.gl.enable(glow::BLEND);
        app.gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
    }

    let (width, height) = app.size();
    let mut window_size = Vec2::new(width as f32, height as f32);

    let shader_program = shader_program!(ui, app.gl, ".")?;
    let atlas = FontAtlas::bundled(&app.gl)?;
    let font = Rc::new(atlas.font());
    let mut renderer = UIRenderer::new(&app.gl, shader_program, atlas, window_size)?;

    let ctx = DemoContext {
        font,
        window_size,
        breakpoints: settings.breakpoints(),
        text,
    };
    let mut navigator =
        Navigator::new(Box::new(MenuScreen::new(&ctx))).with_step(settings.transition_step);
    if let Some(demo) = args.demo {
        log::info!("Opening the {} demo", demo.name());
        navigator.push(demo.create(&ctx));
    }

    app.video_subsystem.text_input().start();

    let mut input = Input::default();
    let mut list = DrawList::new(window_size);
    let mut title = String::new();
    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        input.begin_frame();
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => {
                    window_size = Vec2::new(width as f32, height as f32);
                    log::debug!("Window resized to {}x{}", width, height);
                    renderer.resize(window_size);
                    navigator.resized(window_size);
                }
                _ => {}
            }
            input.handle_event(&event);
        }

        let update_ctx =
            UpdateContext::new(&input.keyboard, &input.mouse, delta_time, window_size);
        if !navigator.update(&update_ctx) {
            log::info!("Quit requested");
            break 'running;
        }

        if let Some(screen) = navigator.current()
            && screen.title() != title
        {
            title = screen.title().to_string();
            if let Err(e) = app.window.set_title(&format!("Panes - {}", title)) {
                log::warn!("Could not set the window title: {}", e);
            }
        }

        list.reset(window_size);
        navigator.draw(&mut list);
        renderer.render(&list, BACKGROUND);
        app.window.gl_swap_window();
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&args) {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    // The log level comes from the settings, so settings load before the logger exists.
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    if let Err(e) = logging::init(log_level(&settings, args.verbosity)) {
        eprintln!("Could not initialize logging: {}", e);
    }
    if let Some(e) = settings_error {
        log::warn!("Using default settings: {}", e);
    }

    if let Err(e) = run(args, settings) {
        log::error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("panes")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_demo_and_verbosity() {
        let parsed = parse_args(&args(&["-d", "Tabs", "-vv", "--text", "notes.txt"]))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.demo, Some(Demo::Tabs));
        assert_eq!(parsed.text_file.as_deref(), Some("notes.txt"));
        assert_eq!(parsed.verbosity, 2);
        assert_eq!(log_level(&Settings::default(), parsed.verbosity), log::LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_demo_lists_names() {
        let err = parse_args(&args(&["--demo", "nope"])).err().unwrap();
        assert!(err.contains("unknown demo 'nope'"));
        assert!(err.contains("textarea"));
    }

    #[test]
    fn test_help_exits_early() {
        assert!(parse_args(&args(&["-h"])).unwrap().is_none());
    }
}
