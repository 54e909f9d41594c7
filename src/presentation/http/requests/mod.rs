use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    #[oai(validator(min_length = 1))]
    pub name: String,
    #[oai(validator(min_length = 1))]
    pub email: String,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    #[oai(validator(min_length = 1))]
    pub name: String,
    #[oai(validator(min_length = 1))]
    pub email: String,
}
