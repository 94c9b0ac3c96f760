use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{FrequencyTable, Symbol};
use crate::{error::Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> usize {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    fn merge(first: HuffmanNode, second: HuffmanNode) -> HuffmanNode {
        HuffmanNode::Internal {
            weight: first.weight() + second.weight(),
            left: Box::new(first),
            right: Box::new(second),
        }
    }
}

// Equal weights are extracted in ascending sequence order: leaves are
// numbered by first occurrence, merged nodes by creation.
struct QueueEntry {
    sequence: usize,
    node: HuffmanNode,
}

impl QueueEntry {
    fn key(&self) -> (usize, usize) {
        (self.node.weight(), self.sequence)
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0;
        for sf in frequencies {
            heap.push(Reverse(QueueEntry {
                sequence,
                node: HuffmanNode::Leaf {
                    symbol: sf.symbol,
                    weight: sf.frequency,
                },
            }));
            sequence += 1;
        }
        // merge nodes until one is left
        loop {
            let Some(Reverse(first)) = heap.pop() else {
                return Err(Error::EmptyFrequencyTable);
            };
            let Some(Reverse(second)) = heap.pop() else {
                log::debug!(
                    "Built Huffman tree with {} leaves and weight {}",
                    frequencies.len(),
                    first.node.weight()
                );
                return Ok(HuffmanTree { root: first.node });
            };
            heap.push(Reverse(QueueEntry {
                sequence,
                node: HuffmanNode::merge(first.node, second.node),
            }));
            sequence += 1;
        }
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![&self.root],
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes()
            .filter(|node| matches!(node, HuffmanNode::Leaf { .. }))
            .count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes()
            .filter(|node| matches!(node, HuffmanNode::Internal { .. }))
            .count()
    }
}

/// Pre-order walk over all nodes, left subtree first.
pub struct Nodes<'a> {
    stack: Vec<&'a HuffmanNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a HuffmanNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let HuffmanNode::Internal { left, right, .. } = node {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl HuffmanNode {
    fn get_string(&self) -> Vec<String> {
        match self {
            Self::Leaf { symbol, weight } => vec![format!("({:?}:{})", symbol, weight)],
            Self::Internal { left, right, .. } => {
                let left_box = left.get_string();
                let right_box = right.get_string();
                let left_width = display_width(&left_box[0]);
                let right_width = display_width(&right_box[0]);
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of_first_line(&left_box[0]);
                let right_pos = center_of_first_line(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..left_box.len().max(right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

fn center_of_first_line(line: &str) -> usize {
    let indentation = line.chars().position(|c| c != ' ').unwrap_or(0);
    (indentation * 2 + display_width(line.trim())) / 2
}

/// Terminal columns taken by `line`. Leaf labels are `Debug` formatted, so
/// control characters and combining marks only show up escaped.
fn display_width(line: &str) -> usize {
    line.chars()
        .map(|c| if is_wide_char(c) { 2 } else { 1 })
        .sum()
}

fn is_wide_char(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F // Hangul Jamo
        | 0x2E80..=0x303E // CJK radicals, Kangxi, CJK symbols and punctuation
        | 0x3041..=0x33FF // Kana, Bopomofo, CJK compatibility
        | 0x3400..=0x4DBF // CJK extension A
        | 0x4E00..=0x9FFF // CJK unified ideographs
        | 0xA000..=0xA4CF // Yi
        | 0xAC00..=0xD7A3 // Hangul syllables
        | 0xF900..=0xFAFF // CJK compatibility ideographs
        | 0xFE10..=0xFE19 // vertical forms
        | 0xFE30..=0xFE6F // CJK compatibility forms, small form variants
        | 0xFF00..=0xFF60 // fullwidth forms
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F // pictographs, emoticons
        | 0x1F900..=0x1F9FF // supplemental symbols and pictographs
        | 0x20000..=0x2FFFD // CJK extensions B to F
        | 0x30000..=0x3FFFD)
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.root.get_string() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
