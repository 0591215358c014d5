use slide_gen::{compose_slide, load_picture, Font, SlideFonts, SlideStyle};

/// Usage: compose-slide <font.ttf> <picture.png> [title]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let font_path = args.next().expect("usage: compose-slide <font> <picture> [title]");
    let picture_path = args.next().expect("usage: compose-slide <font> <picture> [title]");
    let title = args.next().unwrap_or_else(|| "Impressionism".to_string());

    let font = Font::from_file(&font_path).expect("can load font");
    let picture = load_picture(&picture_path).expect("can load picture");

    let style = SlideStyle::default();
    let body = lipsum::lipsum(60).to_lowercase();
    let slide = compose_slide(&style, SlideFonts::single(&font), &title, &body, &picture)
        .expect("slide composes");

    println!("{:#?}", slide.geometry);
    slide.canvas.save("slide.png").expect("can write slide");
}
