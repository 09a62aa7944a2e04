diesel::table! {
	branch (id) {
		id -> BigInt,
		/// Postal address of the branch.
		address -> Varchar,
		/// Internal accounting code of the branch.
		///
		/// Unique across all branches and not changed after insertion.
		internal_code -> Varchar,
		latitude -> Varchar,
		longitude -> Varchar,
	}
}

diesel::table! {
	/// Reference table of maintainable object kinds (lawn, sidewalk, ...).
	///
	/// Seeded by the initial migration; no endpoint writes to it.
	object_type (id) {
		id -> BigInt,
		name -> Varchar,
		measure_unit -> Varchar,
	}
}

diesel::table! {
	/// Table of maintainable physical features owned by a branch.
	branch_object (id) {
		id -> BigInt,
		branch -> BigInt,
		object_type -> BigInt,
		name -> Varchar,
		/// Maintained surface, in the unit of the object type.
		area -> Double,
		description -> Nullable<Varchar>,
	}
}

diesel::table! {
	maintenance_plan (id) {
		id -> BigInt,
		branch -> BigInt,
		/// Target object, when the plan covers a single object
		/// rather than the whole territory.
		object -> Nullable<BigInt>,
		work_type -> Varchar,
		/// Free-form recurrence descriptor ("weekly", "2x per month").
		frequency -> Varchar,
		next_due_at -> Timestamp,
	}
}

diesel::table! {
	completed_work (id) {
		id -> BigInt,
		branch -> BigInt,
		object -> Nullable<BigInt>,
		work_type -> Varchar,
		completed_at -> Timestamp,
		responsible -> Varchar,
		notes -> Nullable<Text>,
	}
}

diesel::table! {
	branch_attachment (id) {
		id -> BigInt,
		branch -> BigInt,
		object -> Nullable<BigInt>,
		/// Kind tag, see `SqlAttachmentKind`.
		kind -> Int2,
		/// Path of the stored file under the uploads root.
		file_path -> Varchar,
		/// Server-assigned upload time.
		uploaded_at -> Timestamp,
	}
}
