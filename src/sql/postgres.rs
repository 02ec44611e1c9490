use sqlx::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres},
    types::Type,
    ValueRef,
};

use super::{decode_cell, SqlCell};
use crate::TimeZone;

impl Type<Postgres> for TimeZone {
    fn type_info() -> PgTypeInfo {
        <str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for TimeZone {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode(self.value(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for TimeZone {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(decode_cell(SqlCell::Null)?);
        }
        let text = <&str as Decode<Postgres>>::decode(value)?;
        Ok(decode_cell(SqlCell::Text(text))?)
    }
}
