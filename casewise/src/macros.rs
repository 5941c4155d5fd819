/// Builds the [`CasePath`](crate::CasePath) for one case of an enum, named
/// syntactically.
///
/// Three forms, one per variant shape:
///
/// ```
/// use casewise::case;
///
/// #[derive(Debug, PartialEq)]
/// enum Command {
///     Halt,
///     Jump(usize),
///     Resize { width: u32, height: u32 },
/// }
///
/// let halt = case!(Command, Halt);
/// let jump = case!(Command, Jump(target));
/// let resize = case!(Command, Resize { width, height });
///
/// assert_eq!(jump.embed(7), Command::Jump(7));
/// assert_eq!(resize.extract(Command::Resize { width: 800, height: 600 }), Some((800, 600)));
/// assert_eq!(halt.extract(Command::Jump(7)), None);
/// ```
///
/// Binder names are only used to thread fields through; multi-field cases
/// carry their fields as a tuple in declaration order, single fields ride
/// bare.
#[macro_export]
macro_rules! case {
    ($($root:ident)::+, $case:ident) => {
        $crate::CasePath::new(
            |()| $($root)::+::$case,
            |root| {
                #[allow(unreachable_patterns)]
                let payload = match root {
                    $($root)::+::$case => Some(()),
                    _ => None,
                };
                payload
            },
        )
    };
    ($($root:ident)::+, $case:ident($binder:ident)) => {
        $crate::CasePath::new(
            |$binder| $($root)::+::$case($binder),
            |root| {
                #[allow(unreachable_patterns)]
                let payload = match root {
                    $($root)::+::$case($binder) => Some($binder),
                    _ => None,
                };
                payload
            },
        )
    };
    ($($root:ident)::+, $case:ident($($binder:ident),+ $(,)?)) => {
        $crate::CasePath::new(
            |($($binder),+)| $($root)::+::$case($($binder),+),
            |root| {
                #[allow(unreachable_patterns)]
                let payload = match root {
                    $($root)::+::$case($($binder),+) => Some(($($binder),+)),
                    _ => None,
                };
                payload
            },
        )
    };
    ($($root:ident)::+, $case:ident { $field:ident $(,)? }) => {
        $crate::CasePath::new(
            |$field| $($root)::+::$case { $field },
            |root| {
                #[allow(unreachable_patterns)]
                let payload = match root {
                    $($root)::+::$case { $field } => Some($field),
                    _ => None,
                };
                payload
            },
        )
    };
    ($($root:ident)::+, $case:ident { $($field:ident),+ $(,)? }) => {
        $crate::CasePath::new(
            |($($field),+)| $($root)::+::$case { $($field),+ },
            |root| {
                #[allow(unreachable_patterns)]
                let payload = match root {
                    $($root)::+::$case { $($field),+ } => Some(($($field),+)),
                    _ => None,
                };
                payload
            },
        )
    };
}

/// The extraction half of [`case!`] on its own.
///
/// Without a trailing value it expands to a closure from the enum to an
/// `Option` of the case's payload; with one, it applies that closure
/// immediately:
///
/// ```
/// use casewise::extract_case;
///
/// #[derive(Debug, PartialEq)]
/// enum Outcome {
///     Ok(i64),
///     Err(String),
/// }
///
/// let grab = extract_case!(Outcome, Ok(value));
/// assert_eq!(grab(Outcome::Ok(113)), Some(113));
/// assert_eq!(extract_case!(Outcome, Ok(value), Outcome::Err("boom".into())), None);
/// ```
#[macro_export]
macro_rules! extract_case {
    ($($root:ident)::+, $case:ident) => {
        |root| {
            #[allow(unreachable_patterns)]
            let payload = match root {
                $($root)::+::$case => Some(()),
                _ => None,
            };
            payload
        }
    };
    ($($root:ident)::+, $case:ident($binder:ident)) => {
        |root| {
            #[allow(unreachable_patterns)]
            let payload = match root {
                $($root)::+::$case($binder) => Some($binder),
                _ => None,
            };
            payload
        }
    };
    ($($root:ident)::+, $case:ident($($binder:ident),+ $(,)?)) => {
        |root| {
            #[allow(unreachable_patterns)]
            let payload = match root {
                $($root)::+::$case($($binder),+) => Some(($($binder),+)),
                _ => None,
            };
            payload
        }
    };
    ($($root:ident)::+, $case:ident { $field:ident $(,)? }) => {
        |root| {
            #[allow(unreachable_patterns)]
            let payload = match root {
                $($root)::+::$case { $field } => Some($field),
                _ => None,
            };
            payload
        }
    };
    ($($root:ident)::+, $case:ident { $($field:ident),+ $(,)? }) => {
        |root| {
            #[allow(unreachable_patterns)]
            let payload = match root {
                $($root)::+::$case { $($field),+ } => Some(($($field),+)),
                _ => None,
            };
            payload
        }
    };
    ($($root:ident)::+, $case:ident, $value:expr) => {
        $crate::extract_case!($($root)::+, $case)($value)
    };
    ($($root:ident)::+, $case:ident($($binder:ident),+ $(,)?), $value:expr) => {
        $crate::extract_case!($($root)::+, $case($($binder),+))($value)
    };
    ($($root:ident)::+, $case:ident { $($field:ident),+ $(,)? }, $value:expr) => {
        $crate::extract_case!($($root)::+, $case { $($field),+ })($value)
    };
}
