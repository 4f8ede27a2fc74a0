use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use eyre::Context;

use super::{InputSource, OutputSource};
use crate::utils;

/// A reader over a compatible input source.
pub enum Reader {
    Stdin(Vec<u8>),
    File(io::BufReader<fs::File>),
}

impl Reader {
    /// Reads the whole input into memory.
    pub fn read_to_vec(self) -> io::Result<Vec<u8>> {
        match self {
            Self::Stdin(buf) => Ok(buf),
            Self::File(mut f) => {
                let size = f
                    .get_ref()
                    .metadata()
                    .ok()
                    .and_then(|m| usize::try_from(m.len()).ok())
                    .unwrap_or(0);
                let mut buf = Vec::with_capacity(size);
                f.read_to_end(&mut buf)?;

                Ok(buf)
            }
        }
    }
}

fn open_stdin() -> eyre::Result<Reader> {
    let mut stdin = utils::stdin_reader();
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;

    Ok(Reader::Stdin(buf))
}

fn open_file(path: &Path) -> eyre::Result<Reader> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    Ok(Reader::File(io::BufReader::new(file)))
}

/// Processes inputs sequentially, one file at a time.
///
/// `read` converts every opened input into a value which is then
/// handed to `write` along with the input path, if any.
pub fn process<T>(
    input: InputSource,
    output: OutputSource,
    mut read: impl FnMut(Reader) -> eyre::Result<T>,
    mut write: impl FnMut(Option<PathBuf>, T, OutputSource) -> eyre::Result<()>,
) -> eyre::Result<()> {
    match (input, output) {
        (InputSource::Stdin, out) => {
            let value = read(open_stdin()?)?;
            write(None, value, out)
        }

        (InputSource::File(path), out) => {
            let value = read(open_file(&path)?)?;
            write(Some(path), value, out)
        }

        (InputSource::Files(paths), OutputSource::Dir(dir, extension)) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create '{}'", dir.display()))?;

            log::info!("Processing {} files into '{}'", paths.len(), dir.display());
            for path in paths {
                let value = read(open_file(&path)?)?;
                write(Some(path), value, OutputSource::Dir(dir.clone(), extension))?;
            }

            Ok(())
        }

        (InputSource::Files(..), _) => Err(eyre::eyre!(
            "input matches several files; specify an output directory instead"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_files_need_an_output_dir() {
        let input = InputSource::Files(vec!["a.bin".into(), "b.bin".into()]);

        let res = process(
            input,
            OutputSource::Stdout,
            |r| r.read_to_vec().map_err(Into::into),
            |_, _: Vec<u8>, _| Ok(()),
        );
        assert!(res.is_err());
    }
}
