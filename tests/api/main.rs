mod contact;
mod health_check;
mod send_email;
