use slide_gen::naming::{rename_sequential, SequentialNames};
use slide_gen::{Curriculum, Font, Pipeline, PreparedLessons, SlideConfig, SlideFonts};

/// Usage: run-curriculum [config.toml] [--rename]
///
/// Composes every lesson of the configured curriculum from slide text and pictures
/// already generated under the configured lessons directory.
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let rename = args.iter().any(|a| a == "--rename");
    let config = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => SlideConfig::load_from_file(path).expect("can load configuration"),
        None => SlideConfig::default(),
    };

    let title_font = Font::from_file(&config.fonts.title).expect("can load title font");
    let body_font = Font::from_file(&config.fonts.body).expect("can load body font");
    let fonts = SlideFonts {
        title: &title_font,
        body: &body_font,
    };

    let curriculum = Curriculum::from_file(&config.paths.curriculum).expect("can load curriculum");
    let prepared = PreparedLessons::new(&config.paths.lessons);
    let pipeline = Pipeline::new(&config, fonts, prepared.clone(), prepared);
    let summary = pipeline.run(&curriculum).expect("can run curriculum");

    println!(
        "{} slides written, {} failed, {} lessons skipped",
        summary.written.len(),
        summary.failed,
        summary.skipped_lessons
    );

    if rename {
        let names = SequentialNames::new(1, config.slides_per_lesson as u32, 5);
        let renamed = rename_sequential(&config.paths.output, names).expect("can rename slides");
        println!("{} slides renamed", renamed.len());
    }
}
