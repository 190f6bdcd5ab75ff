use std::collections::HashMap;

use crate::AssembleError;

/// First address handed out to a user variable. Addresses 0-15 belong
/// to the virtual registers, so allocation starts just above them.
pub const VARIABLE_BASE: u16 = 16;

static PREDEFINED: [(&str, u16); 23] = [
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", 16384),
    ("KBD", 24576),
];

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, Copy)]
struct Symbol {
    address: u16,
    kind: SymbolKind,
}

/// Symbol bindings for one translation unit. Constructed fresh per
/// source file and discarded after encoding.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
    next_variable: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let symbols = PREDEFINED
            .iter()
            .map(|&(name, address)| {
                (
                    name.to_owned(),
                    Symbol {
                        address,
                        kind: SymbolKind::Predefined,
                    },
                )
            })
            .collect();

        Self {
            symbols,
            next_variable: VARIABLE_BASE,
        }
    }

    /// Bind a label found during pass one. A label may shadow a
    /// predefined name, but a second definition of any label is an
    /// error rather than a silent overwrite.
    pub fn define_label(&mut self, name: &str, address: u16) -> Result<(), AssembleError> {
        if let Some(existing) = self.symbols.get(name) {
            if existing.kind != SymbolKind::Predefined {
                return Err(AssembleError::DuplicateLabel(name.to_owned()));
            }
        }

        self.symbols.insert(
            name.to_owned(),
            Symbol {
                address,
                kind: SymbolKind::Label,
            },
        );

        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|symbol| symbol.address)
    }

    /// Resolve a symbol during pass two, binding it to the next free
    /// variable address if nothing else claimed the name first.
    pub fn lookup_or_allocate(&mut self, name: &str) -> u16 {
        if let Some(address) = self.lookup(name) {
            return address;
        }

        let address = self.next_variable;
        self.symbols.insert(
            name.to_owned(),
            Symbol {
                address,
                kind: SymbolKind::Variable,
            },
        );
        self.next_variable += 1;

        address
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
