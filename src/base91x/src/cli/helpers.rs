use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use eyre::Context;

use super::OutputSource;

/// Helper function to be used with [`super::process`] for writing
/// converted data to an output source.
pub fn write_data<T: AsRef<[u8]>>(
    inpath: Option<PathBuf>,
    data: T,
    out: OutputSource,
) -> eyre::Result<()> {
    let data = data.as_ref();

    match (out, inpath) {
        (OutputSource::Stdout, _) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;

            Ok(())
        }

        (OutputSource::File(path), _) => write_file(path, data),

        (OutputSource::Dir(mut out, extension), Some(path)) => {
            // Create a file named after the input in the output directory.
            let infile = path.with_extension(extension);
            let name = infile
                .file_name()
                .ok_or_else(|| eyre::eyre!("input path '{}' has no file name", path.display()))?;
            out.push(name);

            write_file(out, data)
        }

        (OutputSource::Dir(..), None) => Err(eyre::eyre!(
            "output path for stdin input is directory; specify a file path instead"
        )),
    }
}

fn write_file(path: PathBuf, data: &[u8]) -> eyre::Result<()> {
    fs::write(&path, data).with_context(|| format!("failed to write '{}'", path.display()))?;
    log::info!("Wrote {} bytes to '{}'", data.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_output_is_named_after_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputSource::Dir(dir.path().to_owned(), "b91");

        write_data(Some(PathBuf::from("inputs/photo.jpg")), "!!", out).unwrap();

        assert_eq!(fs::read(dir.path().join("photo.b91")).unwrap(), b"!!");
    }

    #[test]
    fn dir_output_rejects_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputSource::Dir(dir.path().to_owned(), "bin");

        assert!(write_data(None, b"data", out).is_err());
    }
}
