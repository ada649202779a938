mod arg_lambda;
