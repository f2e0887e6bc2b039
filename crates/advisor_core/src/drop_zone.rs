use std::fmt;
use std::path::{Path, PathBuf};

/// Which document a drop zone collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentSlot {
    Transcript,
    Resume,
}

impl DocumentSlot {
    /// Multipart field name the analysis service expects for this document.
    pub fn form_field(self) -> &'static str {
        match self {
            DocumentSlot::Transcript => "transcript",
            DocumentSlot::Resume => "resume",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentSlot::Transcript => "Transcript",
            DocumentSlot::Resume => "Resume",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DocumentSlot::Transcript => "Drop transcript PDF here",
            DocumentSlot::Resume => "Drop resume PDF here",
        }
    }
}

/// A file chosen for upload. Only the location is held; bytes are read when
/// the request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub name: String,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }

    pub fn has_pdf_extension(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejection {
    Empty,
    TooManyFiles { count: usize },
    NotPdf { name: String },
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropRejection::Empty => write!(f, "Nothing was dropped"),
            DropRejection::TooManyFiles { count } => {
                write!(f, "Only a single PDF file is accepted ({count} dropped)")
            }
            DropRejection::NotPdf { name } => {
                write!(f, "Only a single PDF file is accepted ({name} is not a PDF)")
            }
        }
    }
}

/// Single-file PDF drop target. Both document slots use this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    slot: DocumentSlot,
    file: Option<PdfDocument>,
    rejection: Option<DropRejection>,
}

impl DropZone {
    pub fn new(slot: DocumentSlot) -> Self {
        Self {
            slot,
            file: None,
            rejection: None,
        }
    }

    pub fn slot(&self) -> DocumentSlot {
        self.slot
    }

    pub fn file(&self) -> Option<&PdfDocument> {
        self.file.as_ref()
    }

    pub fn rejection(&self) -> Option<&DropRejection> {
        self.rejection.as_ref()
    }

    /// Applies a drop. A drop of several files is refused as a whole, and the
    /// current file is only replaced when the drop is accepted.
    pub fn accept(&mut self, mut files: Vec<PdfDocument>) -> Result<(), DropRejection> {
        let outcome = match files.len() {
            0 => Err(DropRejection::Empty),
            1 => {
                let file = files.remove(0);
                if file.has_pdf_extension() {
                    Ok(file)
                } else {
                    Err(DropRejection::NotPdf { name: file.name })
                }
            }
            count => Err(DropRejection::TooManyFiles { count }),
        };

        match outcome {
            Ok(file) => {
                self.file = Some(file);
                self.rejection = None;
                Ok(())
            }
            Err(rejection) => {
                self.rejection = Some(rejection.clone());
                Err(rejection)
            }
        }
    }
}

/// Splits text a terminal pasted for a drag-and-drop into file paths.
///
/// Terminals paste dragged files as shell words: quoted, backslash-escaped,
/// or as `file://` URLs, several per line.
pub fn parse_dropped_paths(raw: &str) -> Vec<PathBuf> {
    split_shell_words(raw)
        .into_iter()
        .map(|word| word_to_path(&word))
        .collect()
}

/// Reads a path typed into a drop zone. Plain text is one path, spaces
/// included; quoted, escaped or `file://` text is split like a paste.
pub fn parse_typed_path(raw: &str) -> Vec<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let shell_quoted = trimmed.contains(['\'', '"'])
        || trimmed.contains("\\ ")
        || trimmed.starts_with("file://");
    if shell_quoted {
        parse_dropped_paths(trimmed)
    } else {
        vec![PathBuf::from(trimmed)]
    }
}

fn word_to_path(word: &str) -> PathBuf {
    match word.strip_prefix("file://") {
        // An empty or `localhost` host both mean this machine.
        Some(rest) => {
            let rest = match rest.strip_prefix("localhost") {
                Some(path) if path.starts_with('/') => path,
                _ => rest,
            };
            PathBuf::from(percent_decode(rest))
        }
        None => PathBuf::from(word),
    }
}

fn split_shell_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_word = true;
                }
                // Only escapes that a terminal emits for dropped paths; a bare
                // backslash stays literal so Windows paths survive.
                '\\' if chars
                    .peek()
                    .is_some_and(|next| next.is_whitespace() || *next == '\'' || *next == '"') =>
                {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word && !current.is_empty() {
                        words.push(std::mem::take(&mut current));
                    }
                    in_word = false;
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }
    if in_word && !current.is_empty() {
        words.push(current);
    }
    words
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(value) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(value);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert!(PdfDocument::from_path("/tmp/CV.PDF").has_pdf_extension());
        assert!(!PdfDocument::from_path("/tmp/cv.docx").has_pdf_extension());
        assert!(!PdfDocument::from_path("/tmp/pdf").has_pdf_extension());
    }

    #[test]
    fn parses_escaped_quoted_and_url_paths() {
        let raw = "/home/a/My\\ Resume.pdf '/tmp/with space.pdf'\nfile:///srv/grades%20final.pdf\n";
        assert_eq!(
            parse_dropped_paths(raw),
            vec![
                PathBuf::from("/home/a/My Resume.pdf"),
                PathBuf::from("/tmp/with space.pdf"),
                PathBuf::from("/srv/grades final.pdf"),
            ]
        );
    }

    #[test]
    fn localhost_file_url_is_absolute() {
        assert_eq!(
            parse_dropped_paths("file://localhost/home/kim/My%20CV.pdf"),
            vec![PathBuf::from("/home/kim/My CV.pdf")]
        );
    }

    #[test]
    fn typed_path_keeps_spaces() {
        assert_eq!(
            parse_typed_path("  /home/kim/My Resume.pdf "),
            vec![PathBuf::from("/home/kim/My Resume.pdf")]
        );
        assert_eq!(
            parse_typed_path("'/tmp/a b.pdf'"),
            vec![PathBuf::from("/tmp/a b.pdf")]
        );
        assert_eq!(
            parse_typed_path("/tmp/My\\ CV.pdf"),
            vec![PathBuf::from("/tmp/My CV.pdf")]
        );
        assert!(parse_typed_path("   ").is_empty());
    }

    #[test]
    fn windows_backslashes_are_kept() {
        assert_eq!(
            parse_dropped_paths("C:\\Users\\kim\\cv.pdf"),
            vec![PathBuf::from("C:\\Users\\kim\\cv.pdf")]
        );
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(parse_dropped_paths("  \n\t ").is_empty());
    }

    #[test]
    fn rejected_drop_keeps_previous_file() {
        let mut zone = DropZone::new(DocumentSlot::Resume);
        zone.accept(vec![PdfDocument::from_path("/a/first.pdf")]).unwrap();

        let err = zone
            .accept(vec![PdfDocument::from_path("/a/notes.txt")])
            .unwrap_err();
        assert_eq!(
            err,
            DropRejection::NotPdf {
                name: "notes.txt".to_string()
            }
        );
        assert_eq!(zone.file().unwrap().name, "first.pdf");
        assert!(zone.rejection().is_some());
    }
}
