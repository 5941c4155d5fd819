use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// A bidirectional accessor for one case of a sum type.
///
/// The pair runs in both directions: `embed` builds a `Root` out of this
/// case's payload, and `extract` recovers the payload from a `Root` that
/// holds this case, reporting `None` for every other case. A lawful pair
/// round-trips: `extract(embed(value))` is always `Some(value)`.
///
/// Case paths are plain values. Cloning one is cheap (the underlying
/// closures are shared), and a shared path can be used from multiple threads
/// as long as its closures can.
pub struct CasePath<Root, Value> {
    embed: Arc<dyn Fn(Value) -> Root + Send + Sync>,
    extract: Arc<dyn Fn(Root) -> Option<Value> + Send + Sync>,
}

impl<Root: 'static, Value: 'static> CasePath<Root, Value> {
    /// Builds a case path from an embed/extract pair.
    ///
    /// The pair is taken on trust: the round-trip law is not checked here,
    /// and an unlawful pair carries its defect into every composition built
    /// from it.
    pub fn new(
        embed: impl Fn(Value) -> Root + Send + Sync + 'static,
        extract: impl Fn(Root) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        CasePath {
            embed: Arc::new(embed),
            extract: Arc::new(extract),
        }
    }

    /// Builds a `Root` holding `value` in this case. Total.
    pub fn embed(&self, value: Value) -> Root {
        (self.embed)(value)
    }

    /// Recovers this case's payload from `root`, or `None` if `root` was
    /// produced by a different case.
    pub fn extract(&self, root: Root) -> Option<Value> {
        (self.extract)(root)
    }

    /// Chains this path with one reaching deeper into `Value`.
    ///
    /// Embedding runs `next` first and this path second; extraction runs
    /// this path first and flat-maps `next`. Both grouping orders of a
    /// longer chain invoke the same closures in the same order, so `append`
    /// is associative.
    pub fn append<Appended: 'static>(
        &self,
        next: &CasePath<Value, Appended>,
    ) -> CasePath<Root, Appended> {
        let outer_embed = Arc::clone(&self.embed);
        let outer_extract = Arc::clone(&self.extract);
        let inner_embed = Arc::clone(&next.embed);
        let inner_extract = Arc::clone(&next.extract);

        CasePath {
            embed: Arc::new(move |value| outer_embed(inner_embed(value))),
            extract: Arc::new(move |root| outer_extract(root).and_then(|value| inner_extract(value))),
        }
    }

    /// Hands out the extract half as a standalone closure, for
    /// `filter_map`-style pipelines.
    pub fn extractor(&self) -> impl Fn(Root) -> Option<Value> {
        let extract = Arc::clone(&self.extract);
        move |root| extract(root)
    }

    /// Whether `root` belongs to this case.
    pub fn matches(&self, root: &Root) -> bool
    where
        Root: Clone,
    {
        self.extract(root.clone()).is_some()
    }

    /// Rebuilds `root` with its payload passed through `transform`, or
    /// `None` if `root` is not this case.
    pub fn try_map(&self, root: Root, transform: impl FnOnce(Value) -> Value) -> Option<Root> {
        self.extract(root).map(|value| self.embed(transform(value)))
    }
}

impl<Root: 'static, Value: 'static> Clone for CasePath<Root, Value> {
    fn clone(&self) -> Self {
        CasePath {
            embed: Arc::clone(&self.embed),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<Root, Value> fmt::Debug for CasePath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CasePath<{}, {}>", type_name::<Root>(), type_name::<Value>())
    }
}

/// Chains a plain extracting function with a deeper case path, producing a
/// new extracting function.
///
/// The degraded, extract-only form of [`CasePath::append`] for pipelines
/// that never re-embed.
pub fn compose_extract<Root, Value: 'static, Appended: 'static>(
    extract: impl Fn(Root) -> Option<Value>,
    next: &CasePath<Value, Appended>,
) -> impl Fn(Root) -> Option<Appended> {
    let next = next.clone();
    move |root| extract(root).and_then(|value| next.extract(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Outcome {
        Ok(i64),
        Err(String),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Outer {
        Wrap(Inner),
        Tag(u8),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Inner {
        Leaf(i64),
        Nothing,
    }

    fn ok_case() -> CasePath<Outcome, i64> {
        CasePath::new(Outcome::Ok, |root| match root {
            Outcome::Ok(value) => Some(value),
            _ => None,
        })
    }

    fn err_case() -> CasePath<Outcome, String> {
        CasePath::new(Outcome::Err, |root| match root {
            Outcome::Err(message) => Some(message),
            _ => None,
        })
    }

    fn wrap_case() -> CasePath<Outer, Inner> {
        CasePath::new(Outer::Wrap, |root| match root {
            Outer::Wrap(inner) => Some(inner),
            _ => None,
        })
    }

    fn leaf_case() -> CasePath<Inner, i64> {
        CasePath::new(Inner::Leaf, |root| match root {
            Inner::Leaf(value) => Some(value),
            _ => None,
        })
    }

    #[test]
    fn embed_builds_the_case() {
        assert_eq!(ok_case().embed(113), Outcome::Ok(113));
    }

    #[test]
    fn extract_recovers_own_payload() {
        assert_eq!(ok_case().extract(Outcome::Ok(113)), Some(113));
    }

    #[test]
    fn extract_rejects_other_cases() {
        assert_eq!(ok_case().extract(Outcome::Err("x".to_string())), None);
        assert_eq!(err_case().extract(Outcome::Ok(113)), None);
    }

    #[test]
    fn append_embeds_inner_then_outer() {
        let path = wrap_case().append(&leaf_case());
        assert_eq!(path.embed(113), Outer::Wrap(Inner::Leaf(113)));
    }

    #[test]
    fn append_extracts_through_both_cases() {
        let path = wrap_case().append(&leaf_case());
        assert_eq!(path.extract(Outer::Wrap(Inner::Leaf(113))), Some(113));
        assert_eq!(path.extract(Outer::Wrap(Inner::Nothing)), None);
        assert_eq!(path.extract(Outer::Tag(7)), None);
    }

    #[test]
    fn matches_checks_without_consuming() {
        let root = Outcome::Ok(1);
        assert!(ok_case().matches(&root));
        assert!(!err_case().matches(&root));
        assert_eq!(root, Outcome::Ok(1));
    }

    #[test]
    fn extractor_feeds_pipelines() {
        let outcomes = vec![
            Outcome::Ok(1),
            Outcome::Err("bad".to_string()),
            Outcome::Ok(2),
        ];
        let values: Vec<i64> = outcomes.into_iter().filter_map(ok_case().extractor()).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn try_map_rewrites_matching_roots() {
        assert_eq!(
            ok_case().try_map(Outcome::Ok(113), |value| value * 2),
            Some(Outcome::Ok(226))
        );
        assert_eq!(ok_case().try_map(Outcome::Err("x".to_string()), |value| value), None);
    }

    #[test]
    fn compose_extract_chains_plain_functions() {
        let unwrap = |root| match root {
            Outer::Wrap(inner) => Some(inner),
            _ => None,
        };
        let leaves = compose_extract(unwrap, &leaf_case());
        assert_eq!(leaves(Outer::Wrap(Inner::Leaf(113))), Some(113));
        assert_eq!(leaves(Outer::Wrap(Inner::Nothing)), None);
        assert_eq!(leaves(Outer::Tag(7)), None);
    }

    #[test]
    fn clones_share_the_same_closures() {
        let original = ok_case();
        let copy = original.clone();
        assert_eq!(copy.extract(original.embed(113)), Some(113));
    }

    #[test]
    fn debug_names_the_type_pair() {
        let rendered = format!("{:?}", ok_case());
        assert!(rendered.starts_with("CasePath<"));
        assert!(rendered.contains("i64"));
    }
}
