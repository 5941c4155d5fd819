/// Sum types whose per-case accessors are known statically.
///
/// Implemented by `#[derive(Casewise)]` from the `casewise_derive` crate,
/// which generates a companion type carrying one accessor method per case:
/// `Outcome::cases().ok()` is the derived [`CasePath`](crate::CasePath) for
/// `Outcome::Ok`.
pub trait Casewise {
    /// Companion type with one `CasePath`-returning method per case.
    type Cases;

    /// The companion value whose methods hand out this type's accessors.
    fn cases() -> Self::Cases;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CasePath;

    // A hand-rolled impl of the seam the derive targets.
    #[derive(Debug, PartialEq)]
    enum Toggle {
        On,
        Off,
    }

    struct ToggleCases;

    impl ToggleCases {
        fn on(&self) -> CasePath<Toggle, ()> {
            CasePath::new(
                |()| Toggle::On,
                |root| match root {
                    Toggle::On => Some(()),
                    _ => None,
                },
            )
        }
    }

    impl Casewise for Toggle {
        type Cases = ToggleCases;

        fn cases() -> Self::Cases {
            ToggleCases
        }
    }

    #[test]
    fn cases_hands_out_accessors() {
        assert_eq!(Toggle::cases().on().embed(()), Toggle::On);
        assert_eq!(Toggle::cases().on().extract(Toggle::Off), None);
    }
}
