use std::path::PathBuf;

use clap::Args;
use glob::glob;

use crate::cli::HYPHEN;

/// An input source to [`InputsOutputs`] machinery.
#[derive(Clone, Debug)]
pub enum InputSource {
    /// The input will be read from stdin.
    Stdin,
    /// The input will be read from a single file.
    File(PathBuf),
    /// Inputs will be read from multiple files (glob).
    Files(Vec<PathBuf>),
}

/// An output source to [`InputsOutputs`] machinery.
#[derive(Clone, Debug)]
pub enum OutputSource {
    /// The output will be written to stdout.
    Stdout,
    /// The output will be written to a single file.
    File(PathBuf),
    /// The output will be written to files in the directory.
    ///
    /// Every file is named after its input, with the extension
    /// replaced by the given one.
    Dir(PathBuf, &'static str),
}

/// Command arguments for converting one or many inputs into outputs.
#[derive(Debug, Args)]
pub struct InputsOutputs {
    /// The input to convert.
    ///
    /// When the value is "-", then input will be read from stdin.
    ///
    /// Everything else will be recognized as a file path. UNIX glob
    /// patterns are supported to specify many files, in which case
    /// the output needs to be a directory.
    pub input: String,

    /// The destination for the converted data.
    ///
    /// When the value is "-", then output will be written to stdout.
    ///
    /// This takes either a path to a single file (if the input was
    /// a single file too), or a path to a directory where output
    /// files will be created for each input file.
    pub output: PathBuf,
}

impl InputsOutputs {
    /// Evaluates the supplied arguments into input and output sources.
    ///
    /// `extension` names the files created in directory outputs.
    pub fn evaluate(self, extension: &'static str) -> eyre::Result<(InputSource, OutputSource)> {
        let inputs = self.input_source()?;
        let outputs = self.output_source(extension, &inputs);

        Ok((inputs, outputs))
    }

    fn input_source(&self) -> eyre::Result<InputSource> {
        // First, check for a hyphen which indicates read from stdin.
        if self.input == HYPHEN {
            return Ok(InputSource::Stdin);
        }

        // Evaluate whatever we have as a glob pattern. Even if it's
        // just a path to a single file, it will work fine here.
        let mut paths: Vec<PathBuf> = glob(&self.input)?.collect::<Result<_, _>>()?;

        if paths.is_empty() {
            Err(eyre::eyre!(
                "failed to find files matching '{}'",
                self.input
            ))
        } else if paths.len() == 1 {
            Ok(InputSource::File(paths.remove(0)))
        } else {
            Ok(InputSource::Files(paths))
        }
    }

    fn output_source(self, extension: &'static str, input: &InputSource) -> OutputSource {
        // First, check for a hyphen which indicates write to stdout.
        if self.output.as_os_str() == HYPHEN {
            return OutputSource::Stdout;
        }

        match input {
            // Several input files always need to be treated as a directory output.
            InputSource::Files(..) => OutputSource::Dir(self.output, extension),

            // An existing directory gets a new file for a single input too.
            _ if self.output.is_dir() => OutputSource::Dir(self.output, extension),

            InputSource::Stdin | InputSource::File(..) => OutputSource::File(self.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(input: &str, output: PathBuf) -> InputsOutputs {
        InputsOutputs {
            input: input.to_owned(),
            output,
        }
    }

    #[test]
    fn hyphens_select_standard_streams() {
        let (inputs, outputs) = args(HYPHEN, PathBuf::from(HYPHEN)).evaluate("b91").unwrap();

        assert!(matches!(inputs, InputSource::Stdin));
        assert!(matches!(outputs, OutputSource::Stdout));
    }

    #[test]
    fn glob_over_many_files_outputs_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.bin"), b"a").unwrap();
        fs::write(dir.path().join("b.bin"), b"b").unwrap();

        let pattern = dir.path().join("*.bin");
        let out = dir.path().join("encoded");
        let (inputs, outputs) = args(pattern.to_str().unwrap(), out.clone())
            .evaluate("b91")
            .unwrap();

        let InputSource::Files(paths) = inputs else {
            panic!("expected several input files");
        };
        assert_eq!(paths.len(), 2);
        assert!(matches!(outputs, OutputSource::Dir(p, "b91") if p == out));
    }

    #[test]
    fn single_file_into_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.bin");
        fs::write(&input, b"data").unwrap();

        let (inputs, outputs) = args(input.to_str().unwrap(), dir.path().to_owned())
            .evaluate("b91")
            .unwrap();

        assert!(matches!(inputs, InputSource::File(p) if p == input));
        assert!(matches!(outputs, OutputSource::Dir(p, "b91") if p == dir.path()));
    }

    #[test]
    fn unmatched_glob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.b91");

        assert!(args(pattern.to_str().unwrap(), PathBuf::from(HYPHEN))
            .evaluate("bin")
            .is_err());
    }
}
