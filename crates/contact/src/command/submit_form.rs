use crate::{ContactFormInput, Error, Receipt, validate};

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub fn submit_form(&self, input: &ContactFormInput) -> crate::Result<Receipt> {
        let request = validate(input).into_result().map_err(Error::Validate)?;

        self.sink.submit(&request)
    }
}
