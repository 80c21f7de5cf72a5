//! Choosing an algorithm by tier.

use cursor_caps::prelude::*;
use cursor_caps::{MethodImpl, NoImpl, StaticMethodImpl, StaticSelect, TierMethodCall, TierStaticCall};

#[derive(Categorized)]
#[cursor(category = Forward)]
struct List;

#[derive(Categorized)]
#[cursor(category = Bidirectional)]
struct Ring;

#[derive(Categorized)]
#[cursor(category = WriteOnce)]
struct Sink;

struct Constant;
struct Reverse;
struct Linear;

impl StaticMethodImpl<&'static str> for Constant {
    fn call() -> &'static str {
        "O(1)"
    }
}

impl StaticMethodImpl<&'static str> for Reverse {
    fn call() -> &'static str {
        "O(n) either way"
    }
}

impl StaticMethodImpl<&'static str> for Linear {
    fn call() -> &'static str {
        "O(n) forward"
    }
}

type Chain<C> = StaticSelect<C, Bidirectional, Reverse, Linear>;

fn advance_cost<C>() -> &'static str
where
    C: TierStaticCall<RandomAccess, Constant, Chain<C>, &'static str>,
{
    <C as TierStaticCall<RandomAccess, Constant, Chain<C>, &'static str>>::call()
}

#[test]
fn test_chained_selection() {
    assert_eq!(advance_cost::<*const u8>(), "O(1)");
    assert_eq!(advance_cost::<Contiguous<*mut u8>>(), "O(1)");
    assert_eq!(advance_cost::<Ring>(), "O(n) either way");
    assert_eq!(advance_cost::<List>(), "O(n) forward");
}

struct Named;

impl<T: ?Sized> MethodImpl<T, String> for Named {
    fn call(_value: &T) -> String {
        std::any::type_name::<T>().rsplit("::").next().unwrap_or_default().to_string()
    }
}

#[test]
fn test_method_selection_with_fallback() {
    assert_eq!(TierMethodCall::<Forward, Named, NoImpl, String>::call(&List), "List");
    assert_eq!(TierMethodCall::<Forward, Named, NoImpl, String>::call(&Sink), "");
}

#[test]
fn test_tier_dispatch_macro() {
    fn label<C: Classify>() -> &'static str {
        tier_dispatch!(C, Bidirectional, {
            AtLeast => "can step back",
            Below => "forward only",
        })
    }

    assert_eq!(label::<Ring>(), "can step back");
    assert_eq!(label::<List>(), "forward only");
    assert_eq!(label::<Sink>(), "forward only");
}
