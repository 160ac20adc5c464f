//! Grid placement of exercises on the page.
//!
//! Placement is plain arithmetic over the page geometry; all randomness has
//! already happened by the time a sequence reaches the grid.

use crate::exercise::Exercise;

/// A4 paper in PostScript points.
pub const A4: (f32, f32) = (595.28, 841.89);

/// Text width measurement for the worksheet body font, supplied by the
/// rendering backend (or a stub in tests).
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
}

/// Page geometry shared by the exercise grid, header and footer.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    /// Inset of the grid from every page edge.
    pub margin: f32,
    /// Gap between exercise text and its answer line, and around rules.
    pub spacing: f32,
    pub rows: usize,
    pub columns: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        let (width, height) = A4;
        Self {
            width,
            height,
            margin: 100.0,
            spacing: 10.0,
            rows: 20,
            columns: 4,
        }
    }
}

/// One exercise fixed to page coordinates, with the span of its answer line.
///
/// `y` is the text baseline; the answer line sits on the same baseline from
/// `line_start` to `line_end`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedExercise {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub line_start: f32,
    pub line_end: f32,
}

impl PageLayout {
    /// Number of grid cells, which is also the required exercise count.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn column_width(&self) -> f32 {
        (self.width - 2.0 * self.margin) / self.columns as f32
    }

    pub fn row_height(&self) -> f32 {
        (self.height - 2.0 * self.margin) / self.rows as f32
    }

    /// Maps the exercise sequence onto the grid, column by column from the
    /// bottom-left corner (page coordinates grow upward): item `i` lands in
    /// column `i / rows`, row `i % rows`.
    ///
    /// # Panics
    /// Panics if `exercises.len() != rows * columns`.
    pub fn place(
        &self,
        exercises: &[Exercise],
        measure: &impl TextMeasure,
    ) -> Vec<PlacedExercise> {
        assert_eq!(
            exercises.len(),
            self.cell_count(),
            "grid wants {} exercises, got {}",
            self.cell_count(),
            exercises.len()
        );

        let column_width = self.column_width();
        let row_height = self.row_height();

        exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                let column = i / self.rows;
                let row = i % self.rows;
                let x = self.margin + column as f32 * column_width;
                let y = self.margin + row as f32 * row_height;
                let text = exercise.to_string();
                PlacedExercise {
                    line_start: x + measure.text_width(&text) + self.spacing,
                    line_end: x + column_width - self.spacing,
                    text,
                    x,
                    y,
                }
            })
            .collect()
    }
}
