use std::collections::HashMap;

use super::{Symbol, SymbolFrequency};

/// Occurrence count of every distinct symbol, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    symbol_frequencies: Vec<SymbolFrequency>,
    positions: HashMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(text: &str) -> Self {
        text.chars().collect()
    }

    fn increment_symbol(&mut self, symbol: Symbol) {
        match self.positions.get(&symbol) {
            Some(&position) => self.symbol_frequencies[position].frequency += 1,
            None => {
                self.positions
                    .insert(symbol, self.symbol_frequencies.len());
                self.symbol_frequencies.push(SymbolFrequency::new(symbol, 1));
            }
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.positions
            .get(&symbol)
            .map(|&position| self.symbol_frequencies[position].frequency)
    }

    pub fn len(&self) -> usize {
        self.symbol_frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_frequencies.is_empty()
    }

    pub fn total(&self) -> usize {
        self.symbol_frequencies.iter().map(|sf| sf.frequency).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolFrequency> {
        self.symbol_frequencies.iter()
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut table = FrequencyTable::new();
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a SymbolFrequency;
    type IntoIter = std::slice::Iter<'a, SymbolFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbol_frequencies.iter()
    }
}
