use console::Style;
use cropper_core::config::CropJob;
use cropper_core::export::ExportOutcome;
use cropper_core::session::JobReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_job_summary(job: &CropJob, report: &JobReport) {
    let s = Styles::new();
    let t = &report.transform;

    println!();
    println!("  {}", s.title.apply_to("Cropper"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(7)));
    println!();

    println!(
        "  {:<12}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(job.input.display())
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(report.source)
    );
    println!(
        "  {:<12}{} at scale {:.4}",
        s.label.apply_to("Preview"),
        s.value.apply_to(t.display_size()),
        t.scale
    );
    println!(
        "  {:<12}{} at ({}, {})",
        s.label.apply_to("Crop"),
        s.value.apply_to(report.crop.size()),
        report.crop.x,
        report.crop.y
    );

    match &report.outcome {
        ExportOutcome::Saved(path) => println!(
            "  {:<12}{}",
            s.label.apply_to("Saved"),
            s.path.apply_to(path.display())
        ),
        ExportOutcome::Cancelled => println!(
            "  {:<12}{}",
            s.label.apply_to("Saved"),
            s.disabled.apply_to("nothing written")
        ),
    }
    println!();
}
