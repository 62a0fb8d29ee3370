// layout.rs - Genomic element offsets and dotplot segment layout

use crate::data::SyntenyBlock;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Offset and extent of one genomic element on the combined axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementSpan {
    pub offset: u64,
    pub extent: u64,
}

/// Genomic elements laid end to end in sorted name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenomicOffsets {
    pub elements: BTreeMap<String, ElementSpan>,
    pub total: u64,
}

impl GenomicOffsets {
    /// Assign cumulative offsets from per-element max extents.
    ///
    /// Each element's offset is the sum of the extents of all elements that
    /// sort before it, so the intervals `[offset, offset + extent)` tile
    /// `[0, total)` without gaps.
    pub fn from_extents(extents: &BTreeMap<String, u64>) -> Self {
        let mut previous = 0u64;
        let mut elements = BTreeMap::new();

        for (name, &extent) in extents {
            elements.insert(
                name.clone(),
                ElementSpan {
                    offset: previous,
                    extent,
                },
            );
            previous = previous.saturating_add(extent);
        }

        Self {
            elements,
            total: previous,
        }
    }

    /// Build the offset map straight from resolved blocks
    pub fn from_blocks(blocks: &[SyntenyBlock]) -> Self {
        Self::from_extents(&max_extents(blocks))
    }

    pub fn offset(&self, name: &str) -> Option<u64> {
        self.elements.get(name).map(|span| span.offset)
    }

    /// Element boundaries on the combined axis: every offset, then the total
    pub fn boundaries(&self) -> Vec<u64> {
        self.elements
            .values()
            .map(|span| span.offset)
            .chain(std::iter::once(self.total))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Max end coordinate of every element, over both sides of all blocks
pub fn max_extents(blocks: &[SyntenyBlock]) -> BTreeMap<String, u64> {
    let mut extents: BTreeMap<String, u64> = BTreeMap::new();
    for block in blocks {
        for (name, end) in [(&block.name_x, block.end_x), (&block.name_y, block.end_y)] {
            let extent = extents.entry(name.clone()).or_insert(0);
            *extent = (*extent).max(end);
        }
    }
    extents
}

/// Drop blocks touching an element that fails the include/exclude patterns
pub fn filter_blocks(
    blocks: Vec<SyntenyBlock>,
    include: Option<&Regex>,
    exclude: Option<&Regex>,
) -> Vec<SyntenyBlock> {
    let keep = |name: &str| {
        include.map_or(true, |re| re.is_match(name)) && !exclude.map_or(false, |re| re.is_match(name))
    };
    blocks
        .into_iter()
        .filter(|b| keep(&b.name_x) && keep(&b.name_y))
        .collect()
}

/// A line segment on the combined axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: (u64, u64),
    pub end: (u64, u64),
}

impl Segment {
    /// Reflection across the diagonal
    pub fn mirror(&self) -> Self {
        Self {
            start: (self.start.1, self.start.0),
            end: (self.end.1, self.end.0),
        }
    }
}

/// Place a block on the combined axes
pub fn place_block(block: &SyntenyBlock, offsets: &GenomicOffsets) -> Result<Segment, String> {
    let offset_x = offsets
        .offset(&block.name_x)
        .ok_or_else(|| format!("Unknown genomic element: {}", block.name_x))?;
    let offset_y = offsets
        .offset(&block.name_y)
        .ok_or_else(|| format!("Unknown genomic element: {}", block.name_y))?;

    let shift = |offset: u64, coord: u64| {
        offset.checked_add(coord).ok_or_else(|| {
            format!(
                "Coordinate overflow placing block {} / {}: {} + {} exceeds u64",
                block.name_x, block.name_y, offset, coord
            )
        })
    };

    Ok(Segment {
        start: (shift(offset_x, block.begin_x)?, shift(offset_y, block.begin_y)?),
        end: (shift(offset_x, block.end_x)?, shift(offset_y, block.end_y)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: &str, (bx, ex): (u64, u64), y: &str, (by, ey): (u64, u64)) -> SyntenyBlock {
        SyntenyBlock {
            name_x: x.to_string(),
            name_y: y.to_string(),
            begin_x: bx,
            end_x: ex,
            begin_y: by,
            end_y: ey,
        }
    }

    #[test]
    fn test_two_element_layout() {
        let blocks = vec![
            block("A", (10, 20), "B", (5, 15)),
            block("A", (60, 100), "B", (30, 50)),
        ];
        let offsets = GenomicOffsets::from_blocks(&blocks);
        assert_eq!(offsets.offset("A"), Some(0));
        assert_eq!(offsets.offset("B"), Some(100));
        assert_eq!(offsets.total, 150);
        assert_eq!(offsets.boundaries(), vec![0, 100, 150]);

        let segment = place_block(&blocks[0], &offsets).unwrap();
        assert_eq!(segment.start, (10, 105));
        assert_eq!(segment.end, (20, 115));
        let mirror = segment.mirror();
        assert_eq!(mirror.start, (105, 10));
        assert_eq!(mirror.end, (115, 20));
    }

    #[test]
    fn test_extents_take_both_sides() {
        let blocks = vec![
            block("chr2", (0, 40), "chr1", (0, 70)),
            block("chr1", (10, 30), "chr2", (0, 90)),
        ];
        let extents = max_extents(&blocks);
        assert_eq!(extents.get("chr1"), Some(&70));
        assert_eq!(extents.get("chr2"), Some(&90));
    }

    #[test]
    fn test_offsets_tile_the_axis() {
        let mut extents = BTreeMap::new();
        for (name, extent) in [("scaf_10", 7u64), ("scaf_2", 300), ("chrX", 0), ("chr1", 42)] {
            extents.insert(name.to_string(), extent);
        }
        let offsets = GenomicOffsets::from_extents(&extents);

        let names: Vec<&String> = offsets.elements.keys().collect();
        assert_eq!(names, vec!["chr1", "chrX", "scaf_10", "scaf_2"]);

        let spans: Vec<ElementSpan> = offsets.elements.values().copied().collect();
        assert!(spans.windows(2).all(|w| w[0].offset <= w[1].offset));
        assert!(spans.windows(2).all(|w| w[0].offset + w[0].extent == w[1].offset));

        let last = spans.last().unwrap();
        let sum: u64 = extents.values().sum();
        assert_eq!(last.offset + last.extent, sum);
        assert_eq!(offsets.total, sum);
    }

    #[test]
    fn test_every_segment_matches_offsets() {
        let blocks = vec![
            block("B", (3, 9), "C", (1, 4)),
            block("A", (0, 12), "B", (2, 20)),
            block("C", (5, 6), "A", (7, 8)),
        ];
        let offsets = GenomicOffsets::from_blocks(&blocks);
        for b in &blocks {
            let s = place_block(b, &offsets).unwrap();
            let ox = offsets.offset(&b.name_x).unwrap();
            let oy = offsets.offset(&b.name_y).unwrap();
            assert_eq!(s.start, (ox + b.begin_x, oy + b.begin_y));
            assert_eq!(s.end, (ox + b.end_x, oy + b.end_y));
        }
    }

    #[test]
    fn test_place_unknown_element() {
        let offsets = GenomicOffsets::default();
        assert!(place_block(&block("A", (0, 1), "B", (0, 1)), &offsets).is_err());
    }

    #[test]
    fn test_place_block_overflow_is_an_error() {
        let blocks = vec![
            block("A", (0, u64::MAX), "A", (0, 1)),
            block("B", (1, 10), "A", (0, 1)),
        ];
        let offsets = GenomicOffsets::from_blocks(&blocks);
        assert_eq!(offsets.offset("B"), Some(u64::MAX));
        assert_eq!(offsets.total, u64::MAX);

        assert!(place_block(&blocks[0], &offsets).is_ok());
        let err = place_block(&blocks[1], &offsets).unwrap_err();
        assert!(err.contains("overflow"));
    }

    #[test]
    fn test_filter_blocks() {
        let blocks = vec![
            block("chr1", (0, 1), "chr2", (0, 1)),
            block("chr1", (0, 1), "scaffold_9", (0, 1)),
            block("chrM", (0, 1), "chr2", (0, 1)),
        ];
        let include = Regex::new("^chr").unwrap();
        let exclude = Regex::new("^chrM$").unwrap();

        let kept = filter_blocks(blocks.clone(), Some(&include), Some(&exclude));
        assert_eq!(kept, vec![blocks[0].clone()]);

        assert_eq!(filter_blocks(blocks.clone(), None, None).len(), 3);
    }
}
