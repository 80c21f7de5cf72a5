//! Tier dispatch demo
//!
//! One `distance` algorithm, two implementations: a random-access cursor
//! subtracts positions, anything weaker walks. The choice is a type, picked
//! from the cursor's tier; there is no runtime branch.
//!
//! Run with `cargo run --example tier_dispatch`.

use cursor_caps::prelude::*;
use cursor_caps::SelectTier;

// =============================================================================
// Step 1: Minimal walking interface
// =============================================================================

trait Walk: Copy {
    fn step(self) -> Self;
    fn same(self, other: Self) -> bool;
}

trait Jump: Walk {
    fn gap(self, origin: Self) -> isize;
}

impl<E> Walk for Contiguous<*const E> {
    fn step(self) -> Self {
        self.step_forward()
    }

    fn same(self, other: Self) -> bool {
        self == other
    }
}

impl<E> Jump for Contiguous<*const E> {
    fn gap(self, origin: Self) -> isize {
        self.offset_from(origin)
    }
}

/// Forward-only cursor over a singly linked chain stored in a slice.
#[derive(Cursor)]
#[cursor(category = Forward, element = u32, pointer = (), reference = u32)]
#[derive(Clone, Copy)]
struct Link<'a> {
    nodes: &'a [(u32, Option<usize>)],
    at: Option<usize>,
}

impl Walk for Link<'_> {
    fn step(self) -> Self {
        let at = self.at.and_then(|i| self.nodes[i].1);
        Link { at, ..self }
    }

    fn same(self, other: Self) -> bool {
        self.at == other.at
    }
}

// =============================================================================
// Step 2: Strategies as types
// =============================================================================

struct ByOffset;
struct BySteps;

trait DistanceImpl<C> {
    fn distance(first: C, last: C) -> isize;
}

impl<C: Jump> DistanceImpl<C> for ByOffset {
    fn distance(first: C, last: C) -> isize {
        last.gap(first)
    }
}

impl<C: Walk> DistanceImpl<C> for BySteps {
    fn distance(mut first: C, last: C) -> isize {
        let mut n = 0;
        while !first.same(last) {
            first = first.step();
            n += 1;
        }
        n
    }
}

// =============================================================================
// Step 3: Select by tier
// =============================================================================

type DistanceFor<C> = <C as SelectTier<RandomAccess, ByOffset, BySteps>>::Out;

fn distance<C>(first: C, last: C) -> isize
where
    C: Classify + SelectTier<RandomAccess, ByOffset, BySteps>,
    DistanceFor<C>: DistanceImpl<C>,
{
    <DistanceFor<C> as DistanceImpl<C>>::distance(first, last)
}

fn strategy_name<C: Classify>() -> &'static str {
    tier_dispatch!(C, RandomAccess, {
        AtLeast => "by offset",
        Below => "by steps",
    })
}

fn main() {
    let data = [2u8, 7, 1, 8, 2, 8];
    let (first, last) = Contiguous::bounds(&data);
    println!("{}", descriptor_of::<Contiguous<*const u8>>().info());
    println!(
        "  distance = {} ({})",
        distance(first, last),
        strategy_name::<Contiguous<*const u8>>()
    );

    let nodes = [(10, Some(2)), (30, None), (20, Some(1))];
    let head = Link { nodes: &nodes, at: Some(0) };
    let end = Link { nodes: &nodes, at: None };
    println!("{}", descriptor_of::<Link<'static>>().info());
    println!("  distance = {} ({})", distance(head, end), strategy_name::<Link<'_>>());

    descriptor_of::<Link<'static>>().inspect(|field, ty| println!("    {field:<9} {ty}"));
}
