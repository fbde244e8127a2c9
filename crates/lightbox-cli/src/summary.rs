use std::path::Path;

use console::Style;
use lightbox_core::geometry::{ImageSize, Translate, Viewport};
use lightbox_core::layout::StyleSet;
use lightbox_core::viewer::{ViewerConfig, ViewerController, ViewerEvent};

use crate::script::{Action, Script};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    event: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            event: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_geometry_summary(
    image: ImageSize,
    viewport: Viewport,
    resting_scale: f32,
    resting: Translate,
    limits: Option<(f32, Translate, Translate)>,
    styles: &StyleSet,
) {
    let s = Styles::new();
    print_title(&s, "Lightbox Geometry");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.width, viewport.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{}x{}", image.width, image.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Orientation"),
        s.value.apply_to(image.orientation())
    );
    println!();

    println!("  {}", s.header.apply_to("Resting"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{resting_scale:.4}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Translate"),
        s.value.apply_to(format!("({:.1}, {:.1})", resting.x, resting.y))
    );
    println!();

    if let Some((scale, lower, upper)) = limits {
        println!("  {}", s.header.apply_to(format!("Pan limits at {scale}x")));
        println!(
            "    {:<12}{}",
            s.label.apply_to("X"),
            s.value.apply_to(format!("[{:.1}, {:.1}]", lower.x, upper.x))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Y"),
            s.value.apply_to(format!("[{:.1}, {:.1}]", lower.y, upper.y))
        );
        println!();
    }

    println!("  {}", s.header.apply_to("Layout"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Header top"),
        s.value.apply_to(styles.header.top)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Loading top"),
        s.value.apply_to(styles.loading_top)
    );
    println!();
}

pub fn print_replay_header(path: &Path, script: &Script, config: &ViewerConfig) {
    let s = Styles::new();
    print_title(&s, "Lightbox Replay");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Script"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!(
            "{}x{}",
            script.viewport.width, script.viewport.height
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(script.images.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Platform"),
        s.value.apply_to(config.platform)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Entrance"),
        s.value.apply_to(config.animation_type)
    );
    if config.glide_enabled() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Glide"),
            s.value.apply_to(format!("{} ms", config.glide_always_delay_ms))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Glide"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();
}

pub fn print_step(at_ms: u64, action: &Action) {
    let s = Styles::new();
    println!(
        "  {:>7} {}",
        s.label.apply_to(format!("{at_ms}ms")),
        s.value.apply_to(action)
    );
}

pub fn print_event(event: &ViewerEvent) {
    let s = Styles::new();
    println!("          {} {}", s.event.apply_to("\u{2192}"), s.event.apply_to(event));
}

pub fn print_final_state(controller: &ViewerController) {
    let s = Styles::new();
    let state = controller.state();
    println!();
    println!("  {}", s.header.apply_to("Final state"));

    if !state.is_open {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Viewer"),
            s.disabled.apply_to("closed")
        );
        println!();
        return;
    }

    println!(
        "    {:<12}{}",
        s.label.apply_to("Index"),
        s.value.apply_to(format!("{} / {}", state.active_index, controller.image_count()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Phase"),
        s.value.apply_to(controller.phase())
    );
    match controller.active_transform() {
        Some(t) => println!(
            "    {:<12}{}",
            s.label.apply_to("Transform"),
            s.value.apply_to(format!(
                "scale {:.3} at ({:.1}, {:.1})",
                t.scale, t.translate.x, t.translate.y
            ))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Transform"),
            s.disabled.apply_to("size unknown")
        ),
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Chrome"),
        s.value.apply_to(if state.chrome_visible { "shown" } else { "hidden" })
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Paging"),
        s.value.apply_to(if controller.scroll_enabled() { "enabled" } else { "locked" })
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Background"),
        s.value.apply_to(controller.background_color())
    );
    println!();
}
