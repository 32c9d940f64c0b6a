mod luhn;
