use crate::message::MessageKey::{self, *};

pub(super) const TEMPLATES: &[(MessageKey, &str)] = &[
    (InvalidString, "The input {keyName} is not a valid string."),
    (InvalidEmail, "The input {keyName} is not a valid email address."),
    (InvalidPhoneNumber, "The input {keyName} is not a valid phone number."),
    (InvalidUrl, "The input {keyName} is not a valid URL."),
    (InvalidValueLength, "The input {keyName} does not meet the required length."),
    (InvalidJson, "The input {keyName} is not a valid JSON."),
    (InvalidUuid, "The input {keyName} is not a valid UUID."),
    (InvalidFilePath, "The input {keyName} is not a valid file path."),
    (InvalidProgrammingLanguage, "The input {keyName} is not a valid programming language."),
    (InvalidDay, "The input {keyName} is not a valid day."),
    (InvalidMonth, "The input {keyName} is not a valid month."),
    (InvalidCreditCard, "The input {keyName} is not a valid credit card number."),
    (InvalidAlphanum, "The input {keyName} must contain only letters and numbers."),
    (InvalidToken, "The input {keyName} is not a valid token."),
    (InvalidHexadecimal, "The input {keyName} is not a valid hexadecimal value."),
    (InvalidIpAddress, "The input {keyName} is not a valid {type} address."),
    (InvalidIpCidrRequired, "The input {keyName} must include a CIDR notation."),
    (InvalidIpCidrForbidden, "The input {keyName} must not include a CIDR notation."),
    (InvalidNumber, "The input {keyName} is not a valid number."),
    (InvalidPositive, "The number {keyName} must be positive."),
    (InvalidNegative, "The number {keyName} must be negative."),
    (InvalidZero, "The number cannot be zero."),
    (InvalidOddNumber, "The number {keyName} must be odd."),
    (InvalidEvenNumber, "The number {keyName} must be even."),
    (InvalidLess, "The number {keyName} must be less than the specified value."),
    (InvalidGreater, "The number {keyName} must be greater than the specified value."),
    (InvalidEqual, "The number {keyName} must be equal to the specified value."),
    (InvalidMultiple, "The input {keyName} is not a multiple of {divisor}."),
    (NotAnInteger, "The input {keyName} is not an integer."),
    (InvalidBoolean, "The input {keyName} is not a valid boolean."),
    (NotTrue, "The input {keyName} is not true."),
    (NotFalse, "The input {keyName} is not false."),
    (DoesNotEqual, "The input {keyName} does not equal {expected}."),
    (InvalidDate, "The input {keyName} is not a valid date."),
    (InvalidDateFormat, "The date format of {keyName} is not valid."),
    (InvalidPastDate, "The date {keyName} must be in the past."),
    (InvalidFutureDate, "The date {keyName} must be in the future."),
    (InvalidDateRange, "The date range from start to end is not valid."),
    (InvalidNotWeekend, "The date {keyName} must fall on a weekend."),
    (NotALeapYear, "The input {keyName} is not a leap year."),
];
