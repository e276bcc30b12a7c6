//! Interactive text menu.
//!
//! Reads choices and titles line by line and writes plain text, so the loop
//! can be driven by stdin/stdout or by in-memory buffers in tests.

use anyhow::Result;
use pipeline::{MovieRecommender, RecommendError};
use std::io::{BufRead, Write};

pub const GOODBYE: &str = "Thank you for using the Movie Recommendation System. Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid input. Please enter 1 or 2.";

enum Choice {
    Recommend,
    Exit,
}

pub struct Interface<'a, R, W> {
    recommender: &'a MovieRecommender,
    top_k: usize,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Interface<'a, R, W> {
    pub fn new(recommender: &'a MovieRecommender, top_k: usize, input: R, output: W) -> Self {
        Self {
            recommender,
            top_k,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// An unknown title is reported and the session continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.front_screen()?;

            let Some(line) = self.prompt("\nPlease enter your choice (1 or 2): ")? else {
                break;
            };
            let choice = match line.trim() {
                "1" => Choice::Recommend,
                "2" => Choice::Exit,
                _ => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            if let Choice::Exit = choice {
                break;
            }

            let Some(title) = self.prompt("\nEnter the title of the movie: ")? else {
                break;
            };
            match self.recommender.recommend(title.trim(), self.top_k) {
                Ok(titles) => self.recommendation_screen(&titles)?,
                Err(e @ RecommendError::NotFound { .. }) => {
                    tracing::error!("Error: {}", e);
                    writeln!(self.output, "Error: {}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        writeln!(self.output, "\n{}", GOODBYE)?;
        Ok(())
    }

    fn front_screen(&mut self) -> Result<()> {
        writeln!(self.output, "\nWelcome to the Movie Recommendation System!")?;
        writeln!(self.output, "1. Get Movie Recommendations")?;
        writeln!(self.output, "2. Exit")?;
        Ok(())
    }

    fn recommendation_screen(&mut self, titles: &[String]) -> Result<()> {
        writeln!(self.output, "\nWe recommend the following movies:")?;
        for (rank, title) in titles.iter().enumerate() {
            writeln!(self.output, "{}. {}", rank + 1, title)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
