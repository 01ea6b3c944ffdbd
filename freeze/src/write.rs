use std::path::Path;
use std::str::FromStr;

use tract_nnef::internal::*;
use tract_onnx_opl::WithOnnx;

/// Container of the NNEF archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ArchiveFormat {
    /// gzip-compressed tar
    #[default]
    Tgz,
    Tar,
}

impl ArchiveFormat {
    /// `.tar` files are plain tar, everything else is compressed.
    pub fn for_path(path: impl AsRef<Path>) -> ArchiveFormat {
        if path.as_ref().extension().map(|e| e == "tar").unwrap_or(false) {
            ArchiveFormat::Tar
        } else {
            ArchiveFormat::Tgz
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = TractError;

    fn from_str(s: &str) -> TractResult<ArchiveFormat> {
        match s {
            "tgz" | "tar.gz" => Ok(ArchiveFormat::Tgz),
            "tar" => Ok(ArchiveFormat::Tar),
            _ => bail!("Unknown archive format {:?} (expected tgz or tar)", s),
        }
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveFormat::Tgz => write!(f, "tgz"),
            ArchiveFormat::Tar => write!(f, "tar"),
        }
    }
}

/// NNEF framework able to express every operator an ONNX import can produce.
pub fn nnef(extended_identifiers: bool) -> Nnef {
    let mut nnef = tract_nnef::nnef().with_tract_core().with_onnx();
    nnef.allow_extended_identifier_syntax(extended_identifiers);
    nnef
}

/// Serializes `model` to `path`, replacing any existing file.
///
/// The archive is built in a temporary file next to `path` and only renamed
/// over it once complete, so a failure leaves the destination untouched.
pub fn write(
    nnef: &Nnef,
    model: &TypedModel,
    path: impl AsRef<Path>,
    format: ArchiveFormat,
) -> TractResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".nnef-freeze").suffix(".partial");
    // regular file mode, left to the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .with_context(|| format!("Creating temporary file in {dir:?}"))?;

    match format {
        ArchiveFormat::Tar => {
            nnef.write_to_tar(model, tmp.as_file_mut())?;
        }
        ArchiveFormat::Tgz => {
            let encoder =
                flate2::write::GzEncoder::new(tmp.as_file_mut(), flate2::Compression::default());
            nnef.write_to_tar(model, encoder)?.finish().context("Finishing gzip stream")?;
        }
    }
    tmp.as_file().sync_all().context("Syncing archive")?;

    if let Ok(previous) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(previous.permissions())
            .with_context(|| format!("Keeping permissions of {path:?}"))?;
    }

    tmp.persist(path).with_context(|| format!("Moving archive to {path:?}"))?;
    info!("Wrote {format} archive {path:?}");
    Ok(())
}
