//! Parquet persistence of the aggregated dataset.
//!
//! Writes the three-column `(sim, bond, prize)` schema the downstream
//! analysis notebooks read; logically the columns are trial id, winning
//! bond index and prize amount. Codec features are off in this build, so row groups are
//! written uncompressed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use parquet::basic::Compression;
use parquet::data_type::Int32Type;
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::{SerializedFileWriter, SerializedRowGroupWriter};
use parquet::schema::parser::parse_message_type;
use tracing::info;

use crate::aggregate::AggregatedDataset;
use crate::error::EngineError;

/// Rows per Parquet row group.
const ROW_GROUP_SIZE: usize = 512 * 1024;

const FILE_SCHEMA: &str = "
message bond_draws {
    required int32 sim;
    required int32 bond;
    required int32 prize;
}
";

/// Writes the dataset to `path` as a Parquet file.
///
/// # Errors
///
/// Returns `EngineError::Io` if the file cannot be created,
/// `EngineError::Persist` on any Parquet-level failure, including a
/// column value that does not fit the file's 32-bit schema.
///
/// # Examples
///
/// ```rust,no_run
/// use bondsim_engine::{write_parquet, AggregatedDataset};
///
/// let dataset = AggregatedDataset::default();
/// write_parquet(&dataset, "bond_sim.parquet".as_ref()).unwrap();
/// ```
pub fn write_parquet(dataset: &AggregatedDataset, path: &Path) -> Result<(), EngineError> {
    let schema = Arc::new(parse_message_type(FILE_SCHEMA)?);
    let props = Arc::new(
        WriterProperties::builder()
            .set_compression(Compression::UNCOMPRESSED)
            .build(),
    );
    let file = File::create(path)?;
    let mut writer = SerializedFileWriter::new(file, schema, props)?;

    let sims = to_i32_column(&dataset.trial_id, "sim")?;
    let bonds = to_i32_column(&dataset.bond, "bond")?;
    let prizes = to_i32_column(&dataset.prize, "prize")?;

    let mut offset = 0;
    while offset < dataset.len() {
        let end = (offset + ROW_GROUP_SIZE).min(dataset.len());
        let mut row_group = writer.next_row_group()?;
        write_column(&mut row_group, &sims[offset..end])?;
        write_column(&mut row_group, &bonds[offset..end])?;
        write_column(&mut row_group, &prizes[offset..end])?;
        row_group.close()?;
        offset = end;
    }

    writer.close()?;
    info!(path = %path.display(), rows = dataset.len(), "wrote dataset");
    Ok(())
}

fn to_i32_column(values: &[u32], name: &str) -> Result<Vec<i32>, EngineError> {
    values
        .iter()
        .map(|&v| {
            i32::try_from(v).map_err(|_| {
                EngineError::Persist(ParquetError::General(format!(
                    "value {v} in column '{name}' exceeds the int32 schema"
                )))
            })
        })
        .collect()
}

fn write_column<W: Write + Send>(
    row_group: &mut SerializedRowGroupWriter<'_, W>,
    values: &[i32],
) -> Result<(), ParquetError> {
    let mut column = row_group
        .next_column()?
        .ok_or_else(|| ParquetError::General("schema has too few columns".to_string()))?;
    column.typed::<Int32Type>().write_batch(values, None, None)?;
    column.close()
}
