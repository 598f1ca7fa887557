#![allow(dead_code)]

use std::sync::Mutex;

use contact_form_contact::{ContactFormInput, ContactRequest, Receipt, SubmissionSink};

pub fn valid_input() -> ContactFormInput {
    ContactFormInput {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        query_type: "Enquiry".to_owned(),
        message: "I would like to know more about the engine.".to_owned(),
        consent: true,
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub requests: Mutex<Vec<ContactRequest>>,
}

impl RecordingSink {
    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, request: &ContactRequest) -> contact_form_contact::Result<Receipt> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());

        Ok(Receipt {
            id: format!("receipt-{}", requests.len()),
        })
    }
}
