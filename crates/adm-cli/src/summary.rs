use adm_core::consts::NUM_SCALES;
use adm_core::dwt::ScaleDims;
use adm_core::pipeline::{RunConfig, SequenceSummary};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
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
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &RunConfig, reference_frames: usize, distorted_frames: usize) {
    let s = Styles::new();
    let adm = &config.adm;

    println!();
    println!("  {}", s.title.apply_to("ADM Score"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!(
        "  {:<14}{} ({} frames)",
        s.label.apply_to("Reference"),
        s.path.apply_to(config.reference.display()),
        reference_frames
    );
    println!(
        "  {:<14}{} ({} frames)",
        s.label.apply_to("Distorted"),
        s.path.apply_to(config.distorted.display()),
        distorted_frames
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Geometry"),
        s.value
            .apply_to(format!("{}x{} {}", adm.width, adm.height, adm.pixel_format))
    );

    let pyramid = ScaleDims::pyramid(adm.width, adm.height)
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" \u{2192} ");
    println!("  {:<14}{}", s.label.apply_to("Sub-bands"), s.value.apply_to(pyramid));

    match config.stats.file {
        Some(ref path) => println!(
            "  {:<14}{} (label '{}')",
            s.label.apply_to("Stats"),
            s.path.apply_to(path.display()),
            config.stats.label
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Stats"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.value
            .apply_to(if config.parallel { "parallel" } else { "sequential" })
    );
    println!();
}

pub fn print_score_summary(summary: &SequenceSummary, per_frame: bool) {
    let s = Styles::new();

    if per_frame {
        println!();
        println!("  {}", s.header.apply_to("Frames"));
        println!("    {:>8}  {:>8}  {:>12}  {:>12}", "Frame #", "Score", "Num", "Den");
        for frame in &summary.frames {
            println!(
                "    {:>8}  {:>8.4}  {:>12.1}  {:>12.1}",
                frame.frame_index, frame.result.score, frame.result.num, frame.result.den
            );
        }
    }

    if !summary.frames.is_empty() {
        println!();
        println!("  {}", s.header.apply_to("Per-scale mean"));
        println!("    {:>6}  {:>12}  {:>12}", "Scale", "Num", "Den");
        let n = summary.frames.len() as f64;
        for scale in 0..NUM_SCALES {
            let num: f64 = summary.frames.iter().map(|f| f.result.scales[scale].num).sum();
            let den: f64 = summary.frames.iter().map(|f| f.result.scales[scale].den).sum();
            println!("    {:>6}  {:>12.1}  {:>12.1}", scale, num / n, den / n);
        }
    }

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scored"),
        s.value.apply_to(summary.frames.len())
    );
    if summary.passed_through > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Unscored"),
            s.disabled.apply_to(format!(
                "{} distorted frame(s) without reference",
                summary.passed_through
            ))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("ADM AVG"),
        s.value.apply_to(format!("{:.3}", summary.average))
    );
    println!();
}
