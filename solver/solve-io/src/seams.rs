//! File-backed implementations of the solver's collaborator seams.
//!
//! These adapters let a solving pipeline source its maze from a JSON
//! file and hand its moves to a JSON file without knowing anything
//! about paths or serialization. Tests swap in the in-memory seams from
//! `solve-types` instead.

use std::path::PathBuf;

use maze_grid::Maze;
use solve_types::{MazeProvider, MoveConsumer, MoveSequence};
use tracing::info;

use crate::error::LoadError;
use crate::maze_json::MazeLoader;
use crate::moves_json::write_moves_file;

/// A [`MazeProvider`] that loads a JSON maze document from a file.
///
/// The file is re-read on every call, so a provider can be polled for a
/// maze that another process regenerates between solves.
#[derive(Debug, Clone)]
pub struct JsonMazeProvider {
    path: PathBuf,
    loader: MazeLoader,
}

impl JsonMazeProvider {
    /// Creates a provider for the given document path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loader: MazeLoader::new(),
        }
    }

    /// Replaces the loader, e.g. to relax the enclosure policy.
    #[must_use]
    pub fn with_loader(mut self, loader: MazeLoader) -> Self {
        self.loader = loader;
        self
    }
}

impl MazeProvider for JsonMazeProvider {
    type Error = LoadError;

    fn provide(&mut self) -> Result<Maze, Self::Error> {
        let bytes = std::fs::read(&self.path)?;
        let maze = self.loader.load(&bytes)?;
        info!(path = %self.path.display(), "provided maze from document");
        Ok(maze)
    }
}

/// A [`MoveConsumer`] that writes each sequence as a JSON move document.
///
/// Each consumed sequence overwrites the target file.
#[derive(Debug, Clone)]
pub struct JsonMoveWriter {
    path: PathBuf,
}

impl JsonMoveWriter {
    /// Creates a writer targeting the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MoveConsumer for JsonMoveWriter {
    type Error = LoadError;

    fn consume(&mut self, moves: &MoveSequence) -> Result<(), Self::Error> {
        write_moves_file(moves, &self.path)?;
        info!(path = %self.path.display(), moves = moves.len(), "wrote move document");
        Ok(())
    }
}
