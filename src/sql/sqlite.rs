use sqlx::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    sqlite::{Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    types::Type,
    ValueRef,
};

use super::{decode_cell, SqlCell};
use crate::TimeZone;

impl Type<Sqlite> for TimeZone {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <str as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for TimeZone {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.value().to_owned(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for TimeZone {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        // `sqlx` hands NULL to non-`Option` types too, so it has to be
        // caught before decoding the text.
        if value.is_null() {
            return Ok(decode_cell(SqlCell::Null)?);
        }
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(decode_cell(SqlCell::Text(text))?)
    }
}
