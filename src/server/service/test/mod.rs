mod coffee;
