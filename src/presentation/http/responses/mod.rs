use poem_openapi::Object;

#[derive(Object)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}
