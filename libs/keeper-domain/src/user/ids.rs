use crate::id::positive_id;

positive_id!(
    /// Unique identifier for a User
    ///
    /// Assigned by the store on creation. Always strictly positive.
    UserId,
    "user id"
);
