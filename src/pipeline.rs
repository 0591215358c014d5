//! Turning a curriculum into slide images, lesson by lesson.
//!
//! Slide text and pictures come from a [ContentSource] and an [ImageSource]: in
//! production these front a language model and a diffusion model, while
//! [PreparedLessons] reads output those models already wrote to disk. Failures are
//! contained: a lesson whose text cannot be fetched is skipped, and a slide that cannot
//! be drawn is logged and counted without stopping the run.

use crate::compose::{compose_slide, SlideFonts};
use crate::config::{SlideConfig, TitleSource};
use crate::content::{Curriculum, Lesson, Slide, SlideDeck};
use crate::error::SlideError;
use crate::naming::{lesson_dir_name, picture_file_name, slide_file_name};
use crate::picture::load_picture;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Produces the text and picture prompts of a lesson's slides
pub trait ContentSource {
    fn slides(&self, lesson: &Lesson<'_>, count: usize) -> Result<SlideDeck, SlideError>;
}

/// Produces the picture for one slide from its prompt. `index` is 1-based.
pub trait ImageSource {
    fn picture(
        &self,
        lesson: &Lesson<'_>,
        index: usize,
        prompt: &str,
    ) -> Result<DynamicImage, SlideError>;
}

/// Slide text and pictures generated ahead of time, laid out as
/// `<root>/<unit>_<week>_<lesson>/slides.json` and `.../image_<n>.png`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLessons {
    root: PathBuf,
}

impl PreparedLessons {
    pub fn new<P: Into<PathBuf>>(root: P) -> PreparedLessons {
        PreparedLessons { root: root.into() }
    }

    /// Directory holding everything generated for `lesson`
    pub fn lesson_dir(&self, lesson: &Lesson<'_>) -> PathBuf {
        self.root
            .join(lesson_dir_name(lesson.unit, lesson.week, lesson.topic))
    }
}

impl ContentSource for PreparedLessons {
    fn slides(&self, lesson: &Lesson<'_>, count: usize) -> Result<SlideDeck, SlideError> {
        let path = self.lesson_dir(lesson).join("slides.json");
        Ok(SlideDeck::from_file(path, count)?)
    }
}

impl ImageSource for PreparedLessons {
    fn picture(
        &self,
        lesson: &Lesson<'_>,
        index: usize,
        _prompt: &str,
    ) -> Result<DynamicImage, SlideError> {
        let path = self.lesson_dir(lesson).join(picture_file_name(index));
        Ok(load_picture(path)?)
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Slides written, in order
    pub written: Vec<PathBuf>,
    /// Slides that could not be produced
    pub failed: usize,
    /// Lessons skipped because their text could not be produced
    pub skipped_lessons: usize,
}

/// Composes every slide of a curriculum and writes them to the configured output
/// directory
pub struct Pipeline<'a, C, I> {
    config: &'a SlideConfig,
    fonts: SlideFonts<'a>,
    content: C,
    pictures: I,
}

impl<'a, C: ContentSource, I: ImageSource> Pipeline<'a, C, I> {
    pub fn new(config: &'a SlideConfig, fonts: SlideFonts<'a>, content: C, pictures: I) -> Self {
        Pipeline {
            config,
            fonts,
            content,
            pictures,
        }
    }

    /// Run every lesson of `curriculum`. Only failing to create the output directory
    /// aborts the run; everything else is logged and tallied in the summary.
    pub fn run(&self, curriculum: &Curriculum) -> Result<RunSummary, SlideError> {
        let output = &self.config.paths.output;
        std::fs::create_dir_all(output)?;

        let mut summary = RunSummary::default();
        for lesson in curriculum.lessons() {
            self.run_lesson(&lesson, output, &mut summary);
        }

        log::info!(
            "wrote {} slides, {} failed, {} lessons skipped",
            summary.written.len(),
            summary.failed,
            summary.skipped_lessons
        );
        Ok(summary)
    }

    fn run_lesson(&self, lesson: &Lesson<'_>, output: &Path, summary: &mut RunSummary) {
        log::info!("processing lesson {:?}", lesson.topic);

        let deck = match self.content.slides(lesson, self.config.slides_per_lesson) {
            Ok(deck) => deck,
            Err(err) => {
                log::warn!("skipping lesson {:?}: {err}", lesson.topic);
                summary.skipped_lessons += 1;
                return;
            }
        };

        for (i, slide) in deck.slides.iter().enumerate() {
            let index = i + 1;
            match self.slide(lesson, index, slide, output) {
                Ok(path) => {
                    log::info!("final slide saved at {}", path.display());
                    summary.written.push(path);
                }
                Err(err) => {
                    log::error!(
                        "error processing slide {index} for lesson {:?}: {err}",
                        lesson.topic
                    );
                    summary.failed += 1;
                }
            }
        }
    }

    fn slide(
        &self,
        lesson: &Lesson<'_>,
        index: usize,
        slide: &Slide,
        output: &Path,
    ) -> Result<PathBuf, SlideError> {
        let picture = self.pictures.picture(lesson, index, &slide.image)?;
        let title = match self.config.title {
            TitleSource::Unit => lesson.unit,
            TitleSource::Week => lesson.week,
            TitleSource::Lesson => lesson.topic,
        };

        let composed = compose_slide(
            &self.config.style,
            self.fonts,
            title,
            &slide.content,
            &picture,
        )?;

        let path = output.join(slide_file_name(
            lesson.unit,
            lesson.week,
            lesson.topic,
            index,
        ));
        composed.canvas.save(&path)?;
        Ok(path)
    }
}
