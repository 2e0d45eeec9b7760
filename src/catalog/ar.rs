use crate::message::MessageKey::{self, *};

pub(super) const TEMPLATES: &[(MessageKey, &str)] = &[
    (InvalidString, "الإدخال {keyName} ليس نصًا صالحًا."),
    (InvalidEmail, "الإدخال {keyName} ليس بريدًا إلكترونيًا صالحًا."),
    (InvalidPhoneNumber, "الإدخال {keyName} ليس رقم هاتف صالح."),
    (InvalidUrl, "الإدخال {keyName} ليس عنوان URL صالحًا."),
    (InvalidValueLength, "الإدخال {keyName} لا يستوفي الطول المطلوب."),
    (InvalidJson, "الإدخال {keyName} ليس JSON صالحًا."),
    (InvalidUuid, "الإدخال {keyName} ليس UUID صالحًا."),
    (InvalidFilePath, "الإدخال {keyName} ليس مسار ملف صالحًا."),
    (InvalidProgrammingLanguage, "الإدخال {keyName} ليس لغة برمجة صالحة."),
    (InvalidDay, "الإدخال {keyName} ليس يومًا صالحًا."),
    (InvalidMonth, "الإدخال {keyName} ليس شهرًا صالحًا."),
    (InvalidCreditCard, "الإدخال {keyName} ليس رقم بطاقة ائتمان صالحًا."),
    (InvalidAlphanum, "يجب أن يحتوي الإدخال {keyName} على أحرف وأرقام فقط."),
    (InvalidToken, "الإدخال {keyName} ليس رمزًا صالحًا."),
    (InvalidHexadecimal, "الإدخال {keyName} ليس قيمة ست عشرية صالحة."),
    (InvalidIpAddress, "الإدخال {keyName} ليس عنوان {type} صالحًا."),
    (InvalidIpCidrRequired, "يجب أن يتضمن الإدخال {keyName} ترميز CIDR."),
    (InvalidIpCidrForbidden, "يجب ألا يتضمن الإدخال {keyName} ترميز CIDR."),
    (InvalidNumber, "الإدخال {keyName} ليس رقمًا صالحًا."),
    (InvalidPositive, "يجب أن يكون الرقم {keyName} موجبًا."),
    (InvalidNegative, "يجب أن يكون الرقم {keyName} سالبًا."),
    (InvalidZero, "يجب ألا يكون الرقم صفرًا."),
    (InvalidOddNumber, "يجب أن يكون الرقم {keyName} فرديًا."),
    (InvalidEvenNumber, "يجب أن يكون الرقم {keyName} زوجيًا."),
    (InvalidLess, "يجب أن يكون الرقم {keyName} أقل من القيمة المحددة."),
    (InvalidGreater, "يجب أن يكون الرقم {keyName} أكبر من القيمة المحددة."),
    (InvalidEqual, "يجب أن يكون الرقم {keyName} مساويًا للقيمة المحددة."),
    (InvalidMultiple, "الإدخال {keyName} ليس مضاعفًا لـ {divisor}."),
    (NotAnInteger, "الإدخال {keyName} ليس عددًا صحيحًا."),
    (InvalidBoolean, "الإدخال {keyName} ليس قيمة منطقية صالحة."),
    (NotTrue, "الإدخال {keyName} ليس صحيحًا."),
    (NotFalse, "الإدخال {keyName} ليس خاطئًا."),
    (DoesNotEqual, "الإدخال {keyName} لا يساوي {expected}."),
    (InvalidDate, "الإدخال {keyName} ليس تاريخًا صالحًا."),
    (InvalidDateFormat, "صيغة التاريخ لـ {keyName} غير صالحة."),
    (InvalidPastDate, "يجب أن يكون التاريخ {keyName} في الماضي."),
    (InvalidFutureDate, "يجب أن يكون التاريخ {keyName} في المستقبل."),
    (InvalidDateRange, "نطاق التاريخ من البداية إلى النهاية غير صالح."),
    (InvalidNotWeekend, "يجب أن يكون التاريخ {keyName} في عطلة نهاية الأسبوع."),
    (NotALeapYear, "الإدخال {keyName} ليس سنة كبيسة."),
];
