use bitflags::bitflags;

use crate::symbols::SymbolModifier;

bitflags! {
    /// Unified modifier bitmask shared by both type universes.
    ///
    /// The bit assignment is fixed and stable so downstream code can treat
    /// handles from either origin uniformly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
    }
}

/// Translates the symbolic modifier vocabulary into the unified bitmask.
///
/// `Default` (the interface default-method marker) has no target bit and
/// contributes nothing; the mapping is deliberately lossy there.
pub fn translate(modifiers: &[SymbolModifier]) -> Modifiers {
    let mut out = Modifiers::empty();
    for modifier in modifiers {
        out |= match modifier {
            SymbolModifier::Public => Modifiers::PUBLIC,
            SymbolModifier::Protected => Modifiers::PROTECTED,
            SymbolModifier::Private => Modifiers::PRIVATE,
            SymbolModifier::Abstract => Modifiers::ABSTRACT,
            SymbolModifier::Static => Modifiers::STATIC,
            SymbolModifier::Final => Modifiers::FINAL,
            SymbolModifier::Transient => Modifiers::TRANSIENT,
            SymbolModifier::Volatile => Modifiers::VOLATILE,
            SymbolModifier::Synchronized => Modifiers::SYNCHRONIZED,
            SymbolModifier::Native => Modifiers::NATIVE,
            SymbolModifier::Strictfp => Modifiers::STRICT,
            SymbolModifier::Default => Modifiers::empty(),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_modifier_sets_exactly_its_bit() {
        let table = [
            (SymbolModifier::Public, Modifiers::PUBLIC),
            (SymbolModifier::Protected, Modifiers::PROTECTED),
            (SymbolModifier::Private, Modifiers::PRIVATE),
            (SymbolModifier::Abstract, Modifiers::ABSTRACT),
            (SymbolModifier::Static, Modifiers::STATIC),
            (SymbolModifier::Final, Modifiers::FINAL),
            (SymbolModifier::Transient, Modifiers::TRANSIENT),
            (SymbolModifier::Volatile, Modifiers::VOLATILE),
            (SymbolModifier::Synchronized, Modifiers::SYNCHRONIZED),
            (SymbolModifier::Native, Modifiers::NATIVE),
            (SymbolModifier::Strictfp, Modifiers::STRICT),
        ];
        for (symbolic, expected) in table {
            let translated = translate(&[symbolic]);
            assert_eq!(translated, expected);
            assert_eq!(translated.bits().count_ones(), 1);
        }
    }

    #[test]
    fn test_default_is_lost_in_translation() {
        assert_eq!(translate(&[SymbolModifier::Default]), Modifiers::empty());
    }

    #[test]
    fn test_combined_modifiers() {
        let translated = translate(&[
            SymbolModifier::Public,
            SymbolModifier::Static,
            SymbolModifier::Final,
            SymbolModifier::Default,
        ]);
        assert_eq!(
            translated,
            Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL
        );
    }
}
