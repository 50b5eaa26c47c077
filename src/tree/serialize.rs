//! The persisted form of a circuit tree: a varint layer count followed by
//! each layer as a varint byte length plus the raw span bytes. Varints are
//! seven-bit groups, most significant group first, with the continuation
//! bit set on every byte but the last.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::tree::Tree;

pub fn write_varint<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    let mut groups = [0u8; 10];
    let mut len = 0;
    let mut rest = value;
    loop {
        groups[len] = (rest & 0x7f) as u8;
        len += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }
    for i in (1..len).rev() {
        writer.write_all(&[groups[i] | 0x80])?;
    }
    writer.write_all(&[groups[0]])?;
    Ok(())
}

pub fn read_varint<R: Read>(reader: &mut R) -> Result<u64> {
    let mut value: u64 = 0;
    for _ in 0..10 {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        if value >> 57 != 0 {
            return Err(Error::CorruptTable("varint overflows 64 bits".into()));
        }
        value = (value << 7) | (byte[0] & 0x7f) as u64;
        if byte[0] & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::CorruptTable("unterminated varint".into()))
}

pub fn write_tree<W: Write>(writer: &mut W, tree: &Tree) -> Result<()> {
    write_varint(writer, tree.n_layers() as u64)?;
    for index in 0..tree.n_layers() {
        let layer = tree.layer(index);
        write_varint(writer, layer.len() as u64)?;
        writer.write_all(layer)?;
    }
    Ok(())
}

/// Checks that `layer` is a well-formed span sequence and returns its span
/// and data-byte counts.
fn span_counts(layer: &[u8]) -> Result<(usize, usize)> {
    let mut position = 0;
    let mut span_count = 0;
    let mut data_bytes = 0;
    while position < layer.len() {
        let len = layer[position] as usize;
        position += 1 + len;
        span_count += 1;
        data_bytes += len;
    }
    if position != layer.len() {
        return Err(Error::CorruptTable("span overruns its layer".into()));
    }
    Ok((span_count, data_bytes))
}

pub fn read_tree<R: Read>(reader: &mut R) -> Result<Tree> {
    let n_layers = read_varint(reader)?;
    let mut tree = Tree::new();
    let mut parents: Option<usize> = None;
    for _ in 0..n_layers {
        let len = read_varint(reader)? as usize;
        let mut layer = vec![0u8; len];
        reader.read_exact(&mut layer)?;
        let (span_count, data_bytes) = span_counts(&layer)?;
        if let Some(parents) = parents {
            if span_count != parents {
                return Err(Error::CorruptTable(
                    "layer span count does not match its parent layer".into(),
                ));
            }
        }
        parents = Some(data_bytes);
        tree.add_layer(layer);
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::GroupedSpanBuilder;

    fn varint_bytes(value: u64) -> Vec<u8> {
        let mut buffer = Vec::new();
        write_varint(&mut buffer, value).unwrap();
        buffer
    }

    #[test]
    fn test_varint_vectors() {
        assert_eq!(varint_bytes(0), vec![0x00]);
        assert_eq!(varint_bytes(127), vec![0x7f]);
        assert_eq!(varint_bytes(128), vec![0x81, 0x00]);
        assert_eq!(varint_bytes(16384), vec![0x81, 0x80, 0x00]);
    }

    #[test]
    fn test_varint_round_trip() {
        for value in [0u64, 1, 127, 128, 300, 16383, 16384, u32::MAX as u64, u64::MAX] {
            let bytes = varint_bytes(value);
            assert_eq!(read_varint(&mut bytes.as_slice()).unwrap(), value);
        }
    }

    #[test]
    fn test_varint_rejects_truncation() {
        assert!(read_varint(&mut [0x81u8].as_slice()).is_err());
    }

    #[test]
    fn test_tree_round_trip() {
        let mut tree = Tree::from_roots([0, 1, 2]);
        let mut builder = GroupedSpanBuilder::new();
        builder.new_span();
        builder.add(5);
        builder.new_span();
        builder.new_span();
        builder.add(1);
        builder.add(2);
        tree.add_layer(builder.build());

        let mut buffer = Vec::new();
        write_tree(&mut buffer, &tree).unwrap();
        assert_eq!(read_tree(&mut buffer.as_slice()).unwrap(), tree);
    }

    #[test]
    fn test_read_tree_rejects_bad_span_counts() {
        // Two layers: roots (0, 1) but only one child span.
        let mut buffer = Vec::new();
        write_varint(&mut buffer, 2).unwrap();
        write_varint(&mut buffer, 3).unwrap();
        buffer.extend_from_slice(&[2, 0, 1]);
        write_varint(&mut buffer, 2).unwrap();
        buffer.extend_from_slice(&[1, 9]);
        assert!(read_tree(&mut buffer.as_slice()).is_err());
    }
}
