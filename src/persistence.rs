//! Binary model format.
//!
//! Layout, with every value 4 bytes wide in host byte order and no header:
//!
//! ```text
//! i32 layer1_rows, i32 layer1_cols
//! f32[layer1_rows][layer1_cols]   row-major weights
//! f32[layer1_rows]                biases
//! i32 layer2_rows, i32 layer2_cols
//! f32[layer2_rows][layer2_cols]
//! f32[layer2_rows]
//! ```
//!
//! Files are only portable between hosts with the same byte order.

use crate::error::{CatDogError, Result};
use crate::layers::DenseLayer;
use crate::network::Network;
use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Serializes `network` to `writer`.
///
/// Fails with `LayerNotAllocated` before writing anything when either layer
/// is a sentinel.
pub fn write_network<W: Write>(network: &Network, writer: &mut W) -> Result<()> {
    check_allocated(network)?;
    write_layer(writer, &network.layer1)?;
    write_layer(writer, &network.layer2)?;
    Ok(())
}

/// Saves `network` to the file at `path`, replacing any existing file.
pub fn save<P: AsRef<Path>>(network: &Network, path: P) -> Result<()> {
    let path = path.as_ref();
    check_allocated(network)?;

    let mut writer = BufWriter::new(File::create(path)?);
    write_network(network, &mut writer)?;
    writer.flush()?;

    tracing::debug!("saved {} parameters to {}", network.parameter_count(), path.display());
    Ok(())
}

/// Reads a model from `reader` into `network`.
///
/// Every dimension read must match `network.architecture()`; a mismatch fails
/// before any storage is allocated for it. Each layer is released before its
/// replacement is read, so after a failure the network is unallocated (or
/// half-loaded) and must not be used for inference or training.
pub fn read_network<R: Read>(network: &mut Network, reader: &mut R) -> Result<()> {
    let architecture = network.architecture();

    network.layer1.release();
    network.layer1 = read_layer(reader, "layer1", Some(architecture.layer1_shape()))?;

    network.layer2.release();
    network.layer2 = read_layer(reader, "layer2", Some(architecture.layer2_shape()))?;

    Ok(())
}

/// Loads the model file at `path` into `network`. See [`read_network`].
pub fn load<P: AsRef<Path>>(network: &mut Network, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    read_network(network, &mut reader)?;

    tracing::debug!("loaded {} from {}", network, path.display());
    Ok(())
}

impl Network {
    /// Builds a network from a serialized model, adopting whatever layer
    /// sizes the stream declares as long as they chain together and end in
    /// two outputs.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let layer1 = read_layer(reader, "layer1", None)?;
        let layer2 = read_layer(reader, "layer2", None)?;
        let network = Network::from_layers(layer1, layer2)?;
        Ok(network)
    }

    /// [`Network::from_reader`] on the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::from_reader(&mut reader)
    }

    /// Shorthand for [`save`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save(self, path)
    }

    /// Shorthand for [`load`].
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        load(self, path)
    }
}

fn check_allocated(network: &Network) -> Result<()> {
    if !network.layer1.is_allocated() {
        return Err(CatDogError::LayerNotAllocated("layer1"));
    }
    if !network.layer2.is_allocated() {
        return Err(CatDogError::LayerNotAllocated("layer2"));
    }
    Ok(())
}

fn write_layer<W: Write>(writer: &mut W, layer: &DenseLayer) -> Result<()> {
    let invalid = || CatDogError::InvalidDimensions {
        rows: layer.rows() as i64,
        cols: layer.cols() as i64,
    };
    let rows = i32::try_from(layer.rows()).map_err(|_| invalid())?;
    let cols = i32::try_from(layer.cols()).map_err(|_| invalid())?;

    writer.write_i32::<NativeEndian>(rows)?;
    writer.write_i32::<NativeEndian>(cols)?;
    for &w in layer.weights() {
        writer.write_f32::<NativeEndian>(w)?;
    }
    for &b in layer.biases() {
        writer.write_f32::<NativeEndian>(b)?;
    }
    Ok(())
}

fn read_layer<R: Read>(
    reader: &mut R,
    name: &'static str,
    expected: Option<(usize, usize)>,
) -> Result<DenseLayer> {
    let rows = reader.read_i32::<NativeEndian>().map_err(CatDogError::from_read)?;
    let cols = reader.read_i32::<NativeEndian>().map_err(CatDogError::from_read)?;
    if rows <= 0 || cols <= 0 {
        return Err(CatDogError::InvalidDimensions {
            rows: rows as i64,
            cols: cols as i64,
        });
    }
    let (rows, cols) = (rows as usize, cols as usize);

    if let Some((expected_rows, expected_cols)) = expected {
        if (rows, cols) != (expected_rows, expected_cols) {
            return Err(CatDogError::ArchitectureMismatch {
                layer: name,
                expected_rows,
                expected_cols,
                found_rows: rows,
                found_cols: cols,
            });
        }
    }

    let mut layer = DenseLayer::zeroed(rows, cols)?;
    reader
        .read_f32_into::<NativeEndian>(layer.weights_mut())
        .map_err(CatDogError::from_read)?;
    reader
        .read_f32_into::<NativeEndian>(layer.biases_mut())
        .map_err(CatDogError::from_read)?;
    Ok(layer)
}
