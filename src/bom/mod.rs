//! Hardware bill of materials

pub mod builder;
pub mod catalog;
pub mod gate_hardware;
pub mod normalize;
pub mod order;

pub use builder::{
    build_order_list, build_order_list_with, builder_for, BomContext, ChannelKitBuilder,
    OrderBuilder, PointFixedBuilder,
};
pub use catalog::describe;
pub use gate_hardware::{tally_gates, GateTally};
pub use normalize::{normalize_finish, normalize_fixing};
pub use order::{OrderItem, OrderList, SubmissionLine};
