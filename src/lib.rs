//! Angle elements for an interactive-geometry board.
//!
//! An angle is defined by three points `A`, `B`, `C` and is visualised as a
//! sector at `B` with a text label. The angle registers itself as a child of
//! its three points so the board re-renders it when one of them moves, and it
//! hands all drawing to a [`render::Renderer`] supplied by the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | Element registry, id/name assignment, dependency links, render pass |
//! | [`angle`] | The angle element and its label anchor geometry |
//! | [`point`] | Point elements (parents of angles) |
//! | [`text`] | Label sub-object attached to an angle |
//! | [`namer`] | Greek-letter auto-naming for unlabelled angles |
//! | [`element`] | Ids, shared element state, the element trait and errors |
//! | [`algebra`] | Angle measure and degeneracy predicates |
//! | [`coords`] | Homogeneous user coordinates |
//! | [`render`] | Renderer trait plus recording and tracing renderers |
//! | [`factory`] | Named element constructors with parent validation |
//! | [`scene`] | Declarative JSON scene descriptions |
//! | [`options`] | Typed style/layer defaults |
//! | [`theme`] | Theme override tables and deep merge |
//! | [`config`] | Environment-driven board configuration |
//! | [`consts`] | Shared constants (label alphabet, rotation divisor) |

pub mod algebra;
pub mod angle;
pub mod board;
pub mod config;
pub mod consts;
pub mod coords;
pub mod element;
pub mod factory;
pub mod namer;
pub mod options;
pub mod point;
pub mod render;
pub mod scene;
pub mod text;
pub mod theme;
