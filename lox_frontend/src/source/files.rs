use std::ops::Range;

use codespan_reporting::files;

/// A struct for efficiently determine lines for an associated
/// file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineOffsets {
  /// The offsets where line break occur in the associated file
  offsets: Vec<usize>,

  /// The full length of the file
  len: usize,
}

#[derive(Debug, PartialEq)]
pub enum LineError {
  OffsetOutOfBounds,
  LineOutOfBounds,
}

impl LineOffsets {
  /// Create a new instance of LineOffsets
  ///
  /// # Examples
  /// ```
  /// use lox_frontend::source::LineOffsets;
  ///
  /// let offsets = LineOffsets::new(vec![0, 10], 20);
  /// ```
  pub fn new(offsets: Vec<usize>, len: usize) -> Self {
    assert!(!offsets.is_empty());
    assert!(*offsets.last().unwrap_or(&0) <= len);

    Self { offsets, len }
  }

  /// Retrieve the total number of lines cataloged
  ///
  /// # Examples
  /// ```
  /// use lox_frontend::source::LineOffsets;
  ///
  /// let offsets = LineOffsets::new(vec![0, 10], 20);
  /// assert_eq!(offsets.lines(), 2);
  /// ```
  pub fn lines(&self) -> usize {
    self.offsets.len()
  }

  /// What line is the provided offset located at
  ///
  /// # Examples
  /// ```
  /// use lox_frontend::source::{LineOffsets, LineError};
  ///
  /// let offsets = LineOffsets::new(vec![0, 10], 20);
  /// assert_eq!(offsets.offset_line(0), Ok(0));
  /// assert_eq!(offsets.offset_line(5), Ok(0));
  /// assert_eq!(offsets.offset_line(11), Ok(1));
  /// assert_eq!(offsets.offset_line(20), Ok(1));
  /// assert_eq!(offsets.offset_line(25), Err(LineError::OffsetOutOfBounds));
  /// ```
  pub fn offset_line(&self, offset: usize) -> Result<usize, LineError> {
    if offset > self.len {
      return Err(LineError::OffsetOutOfBounds);
    }

    Ok(match self.offsets.binary_search(&offset) {
      Ok(line) => line,
      Err(line) => line - 1,
    })
  }

  /// Get the offset ranges bounding a line
  ///
  /// # Examples
  /// ```
  /// use lox_frontend::source::{LineOffsets, LineError};
  ///
  /// let offsets = LineOffsets::new(vec![0, 10], 20);
  /// assert_eq!(offsets.line_range(0), Ok(0..10));
  /// assert_eq!(offsets.line_range(1), Ok(10..20));
  /// assert_eq!(offsets.line_range(2), Err(LineError::LineOutOfBounds));
  /// ```
  pub fn line_range(&self, line: usize) -> Result<Range<usize>, LineError> {
    let lines = self.lines();
    if line >= lines {
      return Err(LineError::LineOutOfBounds);
    }

    if line == lines - 1 {
      Ok(self.offsets[line]..self.len)
    } else {
      Ok(self.offsets[line]..self.offsets[line + 1])
    }
  }
}

/// A source file loaded by the runner
struct SourceFile {
  /// The name of this file
  name: String,

  /// The full source of this file
  source: String,

  /// The line offsets for this file, present once it has been scanned
  line_offsets: Option<LineOffsets>,
}

/// A unique id to a `SourceFile`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceFileId(usize);

/// A database of the files handed to the scanner, used to
/// render diagnostics against their source
#[derive(Default)]
pub struct SourceFiles {
  files: Vec<SourceFile>,
}

impl SourceFiles {
  /// Insert or update a file into the file database. Returns the
  /// `SourceFileId` for the new file or updated file.
  ///
  /// # Examples
  /// ```
  /// use lox_frontend::source::SourceFiles;
  ///
  /// let mut files = SourceFiles::default();
  /// let id1 = files.upsert("first.lox", "var x = 10;");
  /// let id2 = files.upsert("second.lox", "var x = 10;");
  /// let id3 = files.upsert("first.lox", "print x;");
  ///
  /// assert_ne!(id1, id2);
  /// assert_ne!(id2, id3);
  /// assert_eq!(id1, id3);
  /// ```
  pub fn upsert(&mut self, name: &str, source: &str) -> SourceFileId {
    let file = SourceFile {
      name: name.to_string(),
      source: source.to_string(),
      line_offsets: None,
    };

    match self.files.iter().position(|file| file.name == name) {
      Some(id) => {
        self.files[id] = file;
        SourceFileId(id)
      },
      None => {
        self.files.push(file);
        SourceFileId(self.files.len() - 1)
      },
    }
  }

  /// Update a files line offsets after it has been calculated
  ///
  /// # Examples
  /// ```
  /// use lox_frontend::source::{SourceFiles, LineOffsets};
  ///
  /// let mut files = SourceFiles::default();
  /// let id = files.upsert("first.lox", "var x = 10;");
  ///
  /// assert!(files.update_line_offsets(id, LineOffsets::new(vec![0], 11)).is_ok());
  /// ```
  pub fn update_line_offsets(
    &mut self,
    id: SourceFileId,
    line_offsets: LineOffsets,
  ) -> Result<(), files::Error> {
    let file = self.get_mut(id)?;
    file.line_offsets = Some(line_offsets);
    Ok(())
  }

  /// Retrieve an immutable file reference from the file database. Return
  /// a file missing error if not found
  fn get(&self, id: SourceFileId) -> Result<&SourceFile, files::Error> {
    self.files.get(id.0).ok_or(files::Error::FileMissing)
  }

  /// Retrieve an mutable file reference from the file database. Return
  /// a file missing error if not found
  fn get_mut(&mut self, id: SourceFileId) -> Result<&mut SourceFile, files::Error> {
    self.files.get_mut(id.0).ok_or(files::Error::FileMissing)
  }

  /// Retrieve a file with its line offsets
  fn get_scanned(&self, id: SourceFileId) -> Result<(&SourceFile, &LineOffsets), files::Error> {
    let file = self.get(id)?;

    match &file.line_offsets {
      Some(line_offsets) => Ok((file, line_offsets)),
      None => Err(files::Error::FileMissing),
    }
  }
}

impl<'a> files::Files<'a> for SourceFiles {
  type FileId = SourceFileId;
  type Name = &'a str;
  type Source = &'a str;

  fn name(&'a self, id: Self::FileId) -> Result<Self::Name, files::Error> {
    Ok(self.get(id)?.name.as_str())
  }

  fn source(&'a self, id: Self::FileId) -> Result<Self::Source, files::Error> {
    Ok(self.get(id)?.source.as_str())
  }

  fn line_index(&'a self, id: Self::FileId, byte_index: usize) -> Result<usize, files::Error> {
    let (file, line_offsets) = self.get_scanned(id)?;

    line_offsets
      .offset_line(byte_index)
      .map_err(|_| files::Error::IndexTooLarge {
        given: byte_index,
        max: file.source.len(),
      })
  }

  fn line_range(&'a self, id: Self::FileId, line_index: usize) -> Result<Range<usize>, files::Error> {
    let (file, line_offsets) = self.get_scanned(id)?;

    line_offsets
      .line_range(line_index)
      .map_err(|_| files::Error::LineTooLarge {
        given: line_index,
        max: file.source.len(),
      })
  }
}
