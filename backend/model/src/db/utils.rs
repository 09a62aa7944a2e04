//! Database schema maintenance things.

use diesel::{
	AppearsOnTable, Expression,
	expression::NonAggregate,
	pg::Pg,
	query_builder::{QueryFragment, QueryId},
	sql_types::Bool,
	sqlite::Sqlite,
};

/// A boolean filter expression usable against table `T` on both
/// supported backends.
pub trait WherePredicate<T>
where
	Self: Send + AppearsOnTable<T> + QueryId,
	Self: QueryFragment<Pg> + QueryFragment<Sqlite>,
	Self: Expression<SqlType = Bool> + NonAggregate,
{
}

impl<T, V> WherePredicate<V> for T
where
	Self: Send + AppearsOnTable<V> + QueryId,
	Self: QueryFragment<Pg> + QueryFragment<Sqlite>,
	Self: Expression<SqlType = Bool> + NonAggregate,
{
}
